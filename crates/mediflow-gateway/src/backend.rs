//! The wire contract the gateway depends on.

use std::collections::HashMap;

use async_trait::async_trait;
use mediflow_core::GatewayError;

/// Named string fields of one remote table row.
pub type RowFields = HashMap<String, String>;

/// The entire contract with the hosted platform: submit one row of named
/// string fields to a table, receive one row of named string fields back;
/// or run a similarity search over a knowledge table.
///
/// Implemented by [`crate::JamaiClient`] in production and by test doubles
/// that simulate upstream failures deterministically.
#[async_trait]
pub trait TableBackend: Send + Sync {
    /// Submits exactly one row to an action table and returns the output
    /// columns of the one row that comes back. Never streams.
    async fn add_action_row(
        &self,
        table_id: &str,
        fields: RowFields,
    ) -> Result<RowFields, GatewayError>;

    /// Similarity search over a knowledge table. `k` is small (at most 5).
    async fn search_knowledge(
        &self,
        table_id: &str,
        query: &str,
        k: u8,
    ) -> Result<Vec<RowFields>, GatewayError>;
}
