//! Clinic-scoped calls to the shared action tables, with fallback policy.

use std::sync::Arc;

use mediflow_config::ClinicRegistry;
use mediflow_core::{
    BookingOutcome, ClinicIdentity, Language, MedicationEntry, SopAnswer, TableKind,
};
use tracing::warn;

use crate::backend::{RowFields, TableBackend};

/// Maximum chunks fetched on the knowledge-search path.
const STOCK_SEARCH_K: u8 = 1;

/// The sole component that talks to the hosted platform.
///
/// Constructed explicitly at startup and injected into handlers; the
/// backend is a trait object so tests can substitute a deterministic
/// double. Every method resolves the clinic's table names, submits exactly
/// one row, and converts any upstream failure into an in-band fallback
/// result. Methods never return `Err`.
pub struct ClinicGateway {
    backend: Arc<dyn TableBackend>,
    registry: Arc<ClinicRegistry>,
}

impl ClinicGateway {
    pub fn new(backend: Arc<dyn TableBackend>, registry: Arc<ClinicRegistry>) -> Self {
        Self { backend, registry }
    }

    pub fn registry(&self) -> &ClinicRegistry {
        &self.registry
    }

    /// Submits a booking request to the appointment booking table.
    pub async fn book_appointment(
        &self,
        clinic: &ClinicIdentity,
        user_input: &str,
        language: Language,
    ) -> BookingOutcome {
        let table = self
            .registry
            .get(&clinic.clinic_id)
            .action_table_appointment_booking;
        let fields = two_fields("user_input", user_input, &clinic.clinic_name);

        match self.backend.add_action_row(&table, fields).await {
            Ok(row) => BookingOutcome {
                refined_message: text_field(&row, "refined_message"),
                booking_record: json_field(&row, "booking_record"),
                degraded: false,
            },
            Err(e) => {
                warn!(
                    clinic_id = %clinic.clinic_id,
                    table = ?TableKind::AppointmentBooking,
                    error = %e,
                    "action table call failed"
                );
                BookingOutcome::fallback(language)
            }
        }
    }

    /// Asks the PDF/SOP answering table a question.
    pub async fn answer_sop_question(
        &self,
        clinic: &ClinicIdentity,
        question: &str,
        language: Language,
    ) -> SopAnswer {
        let table = self
            .registry
            .get(&clinic.clinic_id)
            .action_table_pdf_sop_answering;
        let fields = two_fields("question", question, &clinic.clinic_name);

        match self.backend.add_action_row(&table, fields).await {
            Ok(row) => SopAnswer {
                response: text_field(&row, "response"),
                source_document: text_field(&row, "source_document"),
                degraded: false,
            },
            Err(e) => {
                warn!(
                    clinic_id = %clinic.clinic_id,
                    table = ?TableKind::SopQna,
                    error = %e,
                    "action table call failed"
                );
                SopAnswer::fallback(language)
            }
        }
    }

    /// Looks a drug up in the medication lookup table. Staff-facing, so the
    /// fallback text is English.
    pub async fn lookup_medication(
        &self,
        clinic: &ClinicIdentity,
        user_input: &str,
    ) -> MedicationEntry {
        let table = self
            .registry
            .get(&clinic.clinic_id)
            .action_table_medication_lookup;
        let fields = two_fields("user_input", user_input, &clinic.clinic_name);

        match self.backend.add_action_row(&table, fields).await {
            Ok(row) => MedicationEntry {
                drug_entry: json_field(&row, "drug_entry"),
                medication_message: text_field(&row, "medication_message"),
                degraded: false,
            },
            Err(e) => {
                warn!(
                    clinic_id = %clinic.clinic_id,
                    table = ?TableKind::MedicationLookup,
                    error = %e,
                    "action table call failed"
                );
                MedicationEntry::fallback(Language::En)
            }
        }
    }

    /// Direct similarity search against the meds knowledge table. Returns a
    /// formatted stock line, or `None` when nothing matches or the search
    /// itself fails.
    pub async fn search_medication_stock(
        &self,
        clinic_id: &str,
        drug_name: &str,
    ) -> Option<String> {
        let table = self.registry.get(clinic_id).knowledge_table_meds;

        let rows = match self
            .backend
            .search_knowledge(&table, drug_name, STOCK_SEARCH_K)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                warn!(clinic_id, error = %e, "knowledge search failed");
                return None;
            }
        };

        let row = rows.first()?;
        let stock = row.get("Stock").map(String::as_str).unwrap_or("unknown");
        let price = row.get("Price").map(String::as_str).unwrap_or("unknown");
        Some(format!("Stock: {stock} units | Price: {price}"))
    }
}

fn two_fields(input_key: &str, input: &str, clinic_name: &str) -> RowFields {
    RowFields::from([
        (input_key.to_string(), input.to_string()),
        ("clinic_name".to_string(), clinic_name.to_string()),
    ])
}

fn text_field(row: &RowFields, name: &str) -> String {
    row.get(name).cloned().unwrap_or_default()
}

/// JSON-typed columns degrade to an empty object rather than an empty
/// string, so downstream decoding stays well-formed.
fn json_field(row: &RowFields, name: &str) -> String {
    match row.get(name) {
        Some(value) if !value.trim().is_empty() => value.clone(),
        _ => "{}".to_string(),
    }
}
