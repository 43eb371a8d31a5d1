//! Configuration for the mediflow backend.
//!
//! Everything here is resolved once at startup and read-only afterwards:
//! environment-sourced [`Settings`], the per-clinic [`ClinicRegistry`] of
//! remote table names, the clinic display-name resolver, and the static
//! clinic directory.

mod clinics;
mod names;
mod registry;
mod settings;

pub use clinics::{clinic_directory, find_clinic, ClinicProfile};
pub use names::resolve_clinic_name;
pub use registry::{ClinicRegistry, ClinicTables};
pub use settings::Settings;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
