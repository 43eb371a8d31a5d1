//! Public clinic directory handlers.

use axum::extract::Path;
use axum::Json;
use mediflow_config::{clinic_directory, find_clinic, ClinicProfile};

use crate::error::AppError;

/// GET /api/v1/clinics
pub async fn list() -> Json<Vec<ClinicProfile>> {
    Json(clinic_directory())
}

/// GET /api/v1/clinics/{clinic_id} - the one lookup where an unknown clinic
/// id is reported as not found instead of synthesized.
pub async fn detail(Path(clinic_id): Path<String>) -> Result<Json<ClinicProfile>, AppError> {
    find_clinic(&clinic_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Clinic {clinic_id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_directory() {
        let Json(clinics) = list().await;
        assert!(!clinics.is_empty());
        assert!(clinics.iter().all(|c| c.is_active));
    }

    #[tokio::test]
    async fn test_detail_reports_unknown_clinic() {
        assert!(detail(Path("klinik-bandar-utama".to_string())).await.is_ok());

        let result = detail(Path("no-such-clinic".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
