use serde::{Deserialize, Serialize};

// === Patient DTOs ===

/// Request body shared by the chat and appointment endpoints.
///
/// Required fields are modeled with defaults and validated in the handler,
/// so a missing field reports a descriptive client error instead of a bare
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub clinic_id: String,
    #[serde(default)]
    pub clinic_name: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source_document: String,
}

#[derive(Debug, Deserialize)]
pub struct TriageRequest {
    #[serde(default)]
    pub clinic_id: String,
    #[serde(default)]
    pub clinic_name: Option<String>,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub patient_age: Option<u32>,
    #[serde(default)]
    pub is_emergency: bool,
}

// === Staff DTOs ===

/// Lookup request, accepted as a JSON body on POST and as query parameters
/// on GET.
#[derive(Debug, Deserialize)]
pub struct MedLookupRequest {
    #[serde(default)]
    pub clinic_id: String,
    #[serde(default)]
    pub clinic_name: Option<String>,
    #[serde(default)]
    pub drug_name: String,
}

#[derive(Debug, Serialize)]
pub struct MedLookupResponse {
    pub drug_entry: String,
    pub medication_message: String,
}

#[derive(Debug, Deserialize)]
pub struct StockCheckParams {
    #[serde(default)]
    pub clinic_id: String,
    #[serde(default)]
    pub drug_name: String,
}

#[derive(Debug, Serialize)]
pub struct StockCheckResponse {
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults_missing_fields() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(req.clinic_id, "");
        assert_eq!(req.message, "hi");
        assert!(req.clinic_name.is_none());
        assert!(req.language.is_none());
    }

    #[test]
    fn test_triage_request_defaults() {
        let req: TriageRequest =
            serde_json::from_str(r#"{"clinic_id": "klinik-a", "symptoms": "demam"}"#).unwrap();
        assert_eq!(req.patient_age, None);
        assert!(!req.is_emergency);
    }
}
