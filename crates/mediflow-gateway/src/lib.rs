//! Gateway to the hosted AI table platform.
//!
//! The [`ClinicGateway`] is the only component that talks to JamAI Base. It
//! wraps the three shared action tables (appointment booking, SOP QnA,
//! medication lookup) and the knowledge-search path, normalises the request
//! shape, extracts named output fields, and applies a uniform
//! fallback-on-error policy so callers never see an upstream failure as an
//! error.

mod backend;
mod gateway;
mod jamai;

pub use backend::{RowFields, TableBackend};
pub use gateway::ClinicGateway;
pub use jamai::JamaiClient;
