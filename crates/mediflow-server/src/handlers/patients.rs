//! Patient-facing handlers: chat/FAQ, appointment booking, triage.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use mediflow_core::Language;

use crate::dto::{ChatRequest, ChatResponse, TriageRequest};
use crate::error::{require, AppError};
use crate::handlers::clinic_identity;
use crate::state::AppState;

/// The product default when the caller does not pick a language.
const DEFAULT_LANGUAGE: &str = "BM";

fn request_language(language: Option<&str>) -> Language {
    Language::from_code(language.unwrap_or(DEFAULT_LANGUAGE))
}

/// POST /api/v1/patients/chat (and the legacy chat aliases).
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let clinic_id = require(&req.clinic_id, "clinic_id")?;
    let message = require(&req.message, "message")?;
    let language = request_language(req.language.as_deref());
    let clinic = clinic_identity(clinic_id, req.clinic_name.as_deref());

    let answer = state
        .gateway
        .answer_sop_question(&clinic, message, language)
        .await;

    Ok(Json(ChatResponse {
        reply: answer.response,
        source_document: answer.source_document,
    }))
}

/// POST /api/v1/patients/appointment. `source_document` carries the
/// JSON-encoded booking record here.
pub async fn appointment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let clinic_id = require(&req.clinic_id, "clinic_id")?;
    let message = require(&req.message, "message")?;
    let language = request_language(req.language.as_deref());
    let clinic = clinic_identity(clinic_id, req.clinic_name.as_deref());

    let outcome = state
        .gateway
        .book_appointment(&clinic, message, language)
        .await;

    Ok(Json(ChatResponse {
        reply: outcome.refined_message,
        source_document: outcome.booking_record,
    }))
}

/// POST /api/v1/patients/triage (legacy). Reshapes the triage fields into a
/// booking call against the same action table.
pub async fn triage(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TriageRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let clinic_id = require(&req.clinic_id, "clinic_id")?;
    let symptoms = require(&req.symptoms, "symptoms")?;
    let clinic = clinic_identity(clinic_id, req.clinic_name.as_deref());
    let user_input = triage_input(symptoms, req.patient_age, req.is_emergency);

    let outcome = state
        .gateway
        .book_appointment(&clinic, &user_input, Language::Bm)
        .await;

    Ok(Json(ChatResponse {
        reply: outcome.refined_message,
        source_document: outcome.booking_record,
    }))
}

fn triage_input(symptoms: &str, patient_age: Option<u32>, is_emergency: bool) -> String {
    let mut input = symptoms.to_string();
    if let Some(age) = patient_age {
        input = format!("Patient age {age}. {input}");
    }
    if is_emergency {
        input = format!("EMERGENCY: {input}");
    }
    input
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::testutil::{row, state_with, MockBackend};

    fn chat_request(clinic_id: &str, message: &str, language: Option<&str>) -> ChatRequest {
        ChatRequest {
            clinic_id: clinic_id.to_string(),
            clinic_name: None,
            message: message.to_string(),
            language: language.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let backend = Arc::new(MockBackend {
            row: row(&[
                ("response", "Kami buka 8 pagi hingga 10 malam."),
                ("source_document", "sop.pdf"),
            ]),
            ..Default::default()
        });
        let state = state_with(backend.clone());

        let request = chat_request("klinik-bandar-utama", "Buka pukul berapa?", Some("BM"));
        let Json(response) = chat(State(state), Json(request)).await.unwrap();

        assert_eq!(response.reply, "Kami buka 8 pagi hingga 10 malam.");
        assert_eq!(response.source_document, "sop.pdf");
        assert_eq!(backend.submissions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_chat_resolves_clinic_name_for_the_payload() {
        let backend = Arc::new(MockBackend::default());
        let state = state_with(backend.clone());

        let request = chat_request("klinik-bandar-utama", "Ada vaksin?", None);
        chat(State(state), Json(request)).await.unwrap();

        let fields = backend.last_fields.lock().unwrap().clone().unwrap();
        assert_eq!(fields["clinic_name"], "Klinik Bandar Utama");
    }

    #[tokio::test]
    async fn test_chat_missing_message_rejected_before_any_call() {
        let backend = Arc::new(MockBackend::default());
        let state = state_with(backend.clone());

        let result = chat(
            State(state),
            Json(chat_request("klinik-bandar-utama", "  ", None)),
        )
        .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(backend.submissions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_appointment_missing_input_rejected_before_any_call() {
        let backend = Arc::new(MockBackend::default());
        let state = state_with(backend.clone());

        let result = appointment(
            State(state),
            Json(chat_request("klinik-bandar-utama", "", Some("BM"))),
        )
        .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(backend.submissions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_surfaces_as_fallback_not_error() {
        let backend = Arc::new(MockBackend {
            fail: true,
            ..Default::default()
        });
        let state = state_with(backend.clone());

        let request = chat_request("klinik-bandar-utama", "Buka pukul berapa?", Some("BM"));
        let Json(response) = chat(State(state), Json(request)).await.unwrap();

        assert_eq!(response.reply, Language::Bm.fallback_message());
        assert_eq!(response.source_document, "");
    }

    #[tokio::test]
    async fn test_appointment_carries_booking_record() {
        let backend = Arc::new(MockBackend {
            row: row(&[
                ("refined_message", "Booked for 10am tomorrow."),
                ("booking_record", r#"{"slot":"10:00"}"#),
            ]),
            ..Default::default()
        });
        let state = state_with(backend.clone());

        let request = chat_request("klinik-sri-hartamas", "I need a checkup", Some("EN"));
        let Json(response) = appointment(State(state), Json(request)).await.unwrap();

        assert_eq!(response.reply, "Booked for 10am tomorrow.");
        assert_eq!(response.source_document, r#"{"slot":"10:00"}"#);
    }

    #[tokio::test]
    async fn test_triage_reshapes_into_booking_input() {
        let backend = Arc::new(MockBackend {
            row: row(&[("refined_message", "Please come in today.")]),
            ..Default::default()
        });
        let state = state_with(backend.clone());

        let request = TriageRequest {
            clinic_id: "klinik-bandar-utama".to_string(),
            clinic_name: None,
            symptoms: "Demam panas 3 hari".to_string(),
            patient_age: Some(6),
            is_emergency: true,
        };
        let Json(response) = triage(State(state), Json(request)).await.unwrap();
        assert_eq!(response.reply, "Please come in today.");

        let fields = backend.last_fields.lock().unwrap().clone().unwrap();
        let user_input = &fields["user_input"];
        assert!(user_input.starts_with("EMERGENCY:"));
        assert!(user_input.contains("Patient age 6."));
        assert!(user_input.contains("Demam panas 3 hari"));
    }

    #[test]
    fn test_request_language_defaults_to_bm() {
        assert_eq!(request_language(None), Language::Bm);
        assert_eq!(request_language(Some("BM")), Language::Bm);
        assert_eq!(request_language(Some("EN")), Language::En);
        assert_eq!(request_language(Some("ZH")), Language::En);
    }
}
