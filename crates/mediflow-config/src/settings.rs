//! Environment-sourced process settings.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::ConfigError;

/// Process-wide settings, read once from the environment at startup.
///
/// `JAMAI_PROJECT_ID` and `JAMAI_API_KEY` are required; everything else has
/// a development default matching the table naming the product uses.
#[derive(Debug, Clone)]
pub struct Settings {
    pub jamai_project_id: String,
    pub jamai_api_key: String,
    pub jamai_api_base: String,

    // Shared action tables (one per operation, filtered by clinic_name)
    pub action_table_booking: String,
    pub action_table_sop_qna: String,
    pub action_table_lookup: String,

    // Shared knowledge tables
    pub knowledge_table_sop: String,
    pub knowledge_table_meds: String,
    pub knowledge_table_faqs: String,

    /// Static secret checked on staff-only routes.
    pub clinic_secret_code: String,

    /// Optional directory of per-clinic table overrides (one JSON file each).
    pub clinic_config_dir: Option<PathBuf>,

    /// Transport timeout for calls to the hosted platform.
    pub request_timeout: Duration,

    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match env::var("JAMAI_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: "JAMAI_TIMEOUT_SECS",
                value: raw,
            })?,
            Err(_) => 30,
        };

        Ok(Self {
            jamai_project_id: required("JAMAI_PROJECT_ID")?,
            jamai_api_key: required("JAMAI_API_KEY")?,
            jamai_api_base: var_or("JAMAI_API_BASE", "https://api.jamaibase.com"),

            action_table_booking: var_or("ACTION_TABLE_BOOKING", "appointment-booking-table"),
            action_table_sop_qna: var_or("ACTION_TABLE_SOP_QNA", "sop-qna-table"),
            action_table_lookup: var_or("ACTION_TABLE_LOOKUP", "medication-lookup-table"),

            knowledge_table_sop: var_or("KNOWLEDGE_TABLE_SOP", "sop-knowledge-table"),
            knowledge_table_meds: var_or("KNOWLEDGE_TABLE_MEDS", "meds-knowledge-table"),
            knowledge_table_faqs: var_or("KNOWLEDGE_TABLE_FAQS", "faqs-knowledge-table"),

            clinic_secret_code: var_or("CLINIC_SECRET_CODE", "MEDIFLOW-ADMIN-2024"),
            clinic_config_dir: env::var("CLINIC_CONFIG_DIR").ok().map(PathBuf::from),
            request_timeout: Duration::from_secs(timeout_secs),
            bind_addr: var_or("BIND_ADDR", "0.0.0.0:8000"),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
