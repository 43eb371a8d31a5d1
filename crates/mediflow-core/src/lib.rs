//! Core domain types shared across the mediflow backend.
//!
//! This crate provides the fundamental types used by the gateway and the
//! HTTP server:
//!
//! - [`GatewayError`] — Error type for calls to the hosted table platform
//! - [`Language`] — Reply language selection with bilingual fallback text
//! - [`ClinicIdentity`] — Per-request clinic id/name pair
//! - [`BookingOutcome`], [`SopAnswer`], [`MedicationEntry`] — Typed results
//!   read back from the shared action tables

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur while talking to the hosted table platform.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The HTTP request could not be sent or timed out.
    #[error("backend request failed: {0}")]
    Transport(String),

    /// The platform answered with a non-success status.
    #[error("backend API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("failed to decode backend response: {0}")]
    Decode(String),

    /// A row was submitted but no row came back.
    #[error("backend returned no rows")]
    EmptyResponse,
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// Reply language requested by the caller.
///
/// Only Bahasa Malaysia is recognised explicitly; every other value falls
/// back to English, which keeps the fallback rule total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Bm,
    En,
}

impl Language {
    /// Parses a language code, case-insensitively. `"BM"` selects Bahasa
    /// Malaysia, anything else selects English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().eq_ignore_ascii_case("bm") {
            true => Language::Bm,
            false => Language::En,
        }
    }

    /// The apology shown to the caller when the platform call fails.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Language::Bm => {
                "Maaf, sistem kami menghadapi masalah teknikal buat masa ini. \
                 Sila cuba sebentar lagi atau hubungi klinik secara terus."
            }
            Language::En => {
                "Sorry, our system is experiencing technical difficulties right now. \
                 Please try again shortly or contact the clinic directly."
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// The clinic scope of a single request.
///
/// `clinic_name` is never empty once constructed; it is either the caller's
/// explicit override or derived from the id by the name resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicIdentity {
    pub clinic_id: String,
    pub clinic_name: String,
}

/// Which shared action table a gateway call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    AppointmentBooking,
    SopQna,
    MedicationLookup,
}

/// Result of an appointment booking call.
///
/// `booking_record` is a JSON-encoded record produced by the booking table;
/// it defaults to `"{}"` whenever the column is absent or the call degraded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingOutcome {
    pub refined_message: String,
    pub booking_record: String,
    pub degraded: bool,
}

impl BookingOutcome {
    pub fn fallback(language: Language) -> Self {
        Self {
            refined_message: language.fallback_message().to_string(),
            booking_record: "{}".to_string(),
            degraded: true,
        }
    }
}

/// Result of an SOP/FAQ question call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SopAnswer {
    pub response: String,
    pub source_document: String,
    pub degraded: bool,
}

impl SopAnswer {
    pub fn fallback(language: Language) -> Self {
        Self {
            response: language.fallback_message().to_string(),
            source_document: String::new(),
            degraded: true,
        }
    }
}

/// Result of a staff medication lookup call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub drug_entry: String,
    pub medication_message: String,
    pub degraded: bool,
}

impl MedicationEntry {
    pub fn fallback(language: Language) -> Self {
        Self {
            drug_entry: "{}".to_string(),
            medication_message: language.fallback_message().to_string(),
            degraded: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("BM"), Language::Bm);
        assert_eq!(Language::from_code("bm"), Language::Bm);
        assert_eq!(Language::from_code(" BM "), Language::Bm);
        assert_eq!(Language::from_code("EN"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        assert_eq!(Language::from_code("ZH"), Language::En);
    }

    #[test]
    fn test_fallback_messages_differ_by_language() {
        let bm = Language::Bm.fallback_message();
        let en = Language::En.fallback_message();
        assert!(!bm.is_empty());
        assert!(!en.is_empty());
        assert_ne!(bm, en);
    }

    #[test]
    fn test_fallback_results_substitute_placeholders() {
        let booking = BookingOutcome::fallback(Language::En);
        assert!(booking.degraded);
        assert_eq!(booking.booking_record, "{}");
        assert_eq!(booking.refined_message, Language::En.fallback_message());

        let answer = SopAnswer::fallback(Language::Bm);
        assert!(answer.degraded);
        assert_eq!(answer.response, Language::Bm.fallback_message());
        assert_eq!(answer.source_document, "");

        let entry = MedicationEntry::fallback(Language::En);
        assert!(entry.degraded);
        assert_eq!(entry.drug_entry, "{}");
    }
}
