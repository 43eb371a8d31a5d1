//! Staff-only handlers, gated by the clinic code header.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use mediflow_config::clinic_directory;

use crate::auth::StaffAuth;
use crate::dto::{MedLookupRequest, MedLookupResponse, StockCheckParams, StockCheckResponse};
use crate::error::{require, AppError};
use crate::handlers::clinic_identity;
use crate::state::AppState;

/// POST /api/v1/staff/medication-lookup
pub async fn medication_lookup(
    State(state): State<Arc<AppState>>,
    _auth: StaffAuth,
    Json(req): Json<MedLookupRequest>,
) -> Result<Json<MedLookupResponse>, AppError> {
    lookup(&state, req).await
}

/// GET /api/v1/staff/medication-lookup
pub async fn medication_lookup_query(
    State(state): State<Arc<AppState>>,
    _auth: StaffAuth,
    Query(req): Query<MedLookupRequest>,
) -> Result<Json<MedLookupResponse>, AppError> {
    lookup(&state, req).await
}

async fn lookup(
    state: &AppState,
    req: MedLookupRequest,
) -> Result<Json<MedLookupResponse>, AppError> {
    let clinic_id = require(&req.clinic_id, "clinic_id")?;
    let drug_name = require(&req.drug_name, "drug_name")?;
    let clinic = clinic_identity(clinic_id, req.clinic_name.as_deref());

    let entry = state.gateway.lookup_medication(&clinic, drug_name).await;

    Ok(Json(MedLookupResponse {
        drug_entry: entry.drug_entry,
        medication_message: entry.medication_message,
    }))
}

/// GET /api/v1/staff/stock-check - legacy direct search against the meds
/// knowledge table.
pub async fn stock_check(
    State(state): State<Arc<AppState>>,
    _auth: StaffAuth,
    Query(params): Query<StockCheckParams>,
) -> Result<Json<StockCheckResponse>, AppError> {
    let clinic_id = require(&params.clinic_id, "clinic_id")?;
    let drug_name = require(&params.drug_name, "drug_name")?;

    let data = state
        .gateway
        .search_medication_stock(clinic_id, drug_name)
        .await
        .unwrap_or_else(|| "Medication not found in stock list.".to_string());

    Ok(Json(StockCheckResponse { data }))
}

/// GET /api/v1/shared-tables - the shared table names behind every clinic.
pub async fn shared_tables(
    State(state): State<Arc<AppState>>,
    _auth: StaffAuth,
) -> Json<serde_json::Value> {
    let settings = &state.settings;
    Json(serde_json::json!({
        "shared_tables": {
            "action_table_appointment_booking": settings.action_table_booking,
            "action_table_pdf_sop_answering": settings.action_table_sop_qna,
            "action_table_medication_lookup": settings.action_table_lookup,
        },
        "note": "All tables are shared across clinics, filtered by clinic_name column",
        "jamai_project_id": settings.jamai_project_id,
    }))
}

/// GET /api/v1/admin/system-status
pub async fn system_status(
    State(state): State<Arc<AppState>>,
    _auth: StaffAuth,
) -> Json<serde_json::Value> {
    let clinics = clinic_directory();
    let active: Vec<_> = clinics
        .iter()
        .filter(|c| c.is_active)
        .map(|c| c.clinic_id.clone())
        .collect();

    let settings = &state.settings;
    Json(serde_json::json!({
        "total_clinics": clinics.len(),
        "active_clinics": active,
        "jamai_project_id": settings.jamai_project_id,
        "shared_tables": {
            "appointment_booking": settings.action_table_booking,
            "sop_qna": settings.action_table_sop_qna,
            "medication_lookup": settings.action_table_lookup,
        },
        "system_health": "operational",
    }))
}
