//! HTTP route handlers.

pub mod clinics;
pub mod patients;
pub mod staff;

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use mediflow_config::resolve_clinic_name;
use mediflow_core::ClinicIdentity;

use crate::state::AppState;

/// Builds the clinic scope of one request: the validated id plus a display
/// name that is never empty.
pub fn clinic_identity(clinic_id: &str, explicit_name: Option<&str>) -> ClinicIdentity {
    ClinicIdentity {
        clinic_id: clinic_id.to_string(),
        clinic_name: resolve_clinic_name(clinic_id, explicit_name),
    }
}

/// Health probe.
pub async fn health() -> &'static str {
    "OK"
}

/// Service status summary shown at the root path.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "online",
        "service": "MediFlow AI Nurse - Multi-Clinic Edition",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "Multi-clinic support",
            "AI FAQ Nurse (BM/English)",
            "AI Appointment Triage",
            "PDF & SOP Search",
            "Medication Quick Lookup (Staff Only)",
            "Multilingual Support",
        ],
        "configured_clinics": state.gateway.registry().all_clinic_ids(),
    }))
}
