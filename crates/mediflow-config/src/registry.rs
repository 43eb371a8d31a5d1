//! Per-clinic remote table configuration.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clinics::clinic_directory;
use crate::settings::Settings;
use crate::ConfigError;

/// The set of remote table names one clinic's requests are routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicTables {
    pub knowledge_table_sop: String,
    pub knowledge_table_meds: String,
    pub knowledge_table_faqs: String,
    pub action_table_appointment_booking: String,
    pub action_table_pdf_sop_answering: String,
    pub action_table_medication_lookup: String,
}

impl ClinicTables {
    /// The shared tables every clinic uses unless overridden.
    pub fn shared(settings: &Settings) -> Self {
        Self {
            knowledge_table_sop: settings.knowledge_table_sop.clone(),
            knowledge_table_meds: settings.knowledge_table_meds.clone(),
            knowledge_table_faqs: settings.knowledge_table_faqs.clone(),
            action_table_appointment_booking: settings.action_table_booking.clone(),
            action_table_pdf_sop_answering: settings.action_table_sop_qna.clone(),
            action_table_medication_lookup: settings.action_table_lookup.clone(),
        }
    }

    /// Deterministic defaults derived from a clinic id with no configuration.
    pub fn synthesized(clinic_id: &str) -> Self {
        Self {
            knowledge_table_sop: format!("{clinic_id}-sop-knowledge"),
            knowledge_table_meds: format!("{clinic_id}-meds-knowledge"),
            knowledge_table_faqs: format!("{clinic_id}-faqs-knowledge"),
            action_table_appointment_booking: format!("{clinic_id}-appointment-booking-action"),
            action_table_pdf_sop_answering: format!("{clinic_id}-pdf-sop-answering-action"),
            action_table_medication_lookup: format!("{clinic_id}-medication-lookup-action"),
        }
    }
}

/// One per-clinic override file: the clinic id plus its table names.
#[derive(Debug, Deserialize)]
struct ClinicEntry {
    clinic_id: String,
    #[serde(flatten)]
    tables: ClinicTables,
}

/// Maps clinic ids to their remote table names.
///
/// Lookup is total: an unconfigured id resolves to synthesized defaults
/// rather than an error.
#[derive(Debug, Default)]
pub struct ClinicRegistry {
    clinics: HashMap<String, ClinicTables>,
}

impl ClinicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from settings: every clinic in the directory gets
    /// the shared tables, then per-clinic JSON overrides (if a config
    /// directory is set) replace individual entries.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let mut registry = Self::new();

        for clinic in clinic_directory() {
            registry
                .clinics
                .insert(clinic.clinic_id, ClinicTables::shared(settings));
        }

        if let Some(dir) = &settings.clinic_config_dir {
            registry.load_overrides(dir)?;
        }

        Ok(registry)
    }

    fn load_overrides(&mut self, dir: &Path) -> Result<(), ConfigError> {
        let entries = fs::read_dir(dir)?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                let entry: ClinicEntry = serde_json::from_str(&content)?;
                self.clinics.insert(entry.clinic_id, entry.tables);
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, clinic_id: impl Into<String>, tables: ClinicTables) {
        self.clinics.insert(clinic_id.into(), tables);
    }

    /// Returns the tables for a clinic. Never fails: unknown ids get
    /// synthesized defaults.
    pub fn get(&self, clinic_id: &str) -> ClinicTables {
        self.clinics
            .get(clinic_id)
            .cloned()
            .unwrap_or_else(|| ClinicTables::synthesized(clinic_id))
    }

    /// All configured clinic ids, order-irrelevant, possibly empty.
    pub fn all_clinic_ids(&self) -> Vec<String> {
        self.clinics.keys().cloned().collect()
    }
}
