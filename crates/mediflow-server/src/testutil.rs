//! Shared fixtures for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mediflow_config::{ClinicRegistry, Settings};
use mediflow_core::GatewayError;
use mediflow_gateway::{ClinicGateway, RowFields, TableBackend};

use crate::state::AppState;

/// Backend double: serves one canned row (or fails every call) and records
/// submissions so tests can assert the no-call and single-call properties.
#[derive(Default)]
pub struct MockBackend {
    pub row: RowFields,
    pub fail: bool,
    pub submissions: AtomicUsize,
    pub last_fields: Mutex<Option<RowFields>>,
}

#[async_trait]
impl TableBackend for MockBackend {
    async fn add_action_row(
        &self,
        _table_id: &str,
        fields: RowFields,
    ) -> Result<RowFields, GatewayError> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        *self.last_fields.lock().unwrap() = Some(fields);
        match self.fail {
            true => Err(GatewayError::Transport("connection refused".into())),
            false => Ok(self.row.clone()),
        }
    }

    async fn search_knowledge(
        &self,
        _table_id: &str,
        _query: &str,
        _k: u8,
    ) -> Result<Vec<RowFields>, GatewayError> {
        match self.fail {
            true => Err(GatewayError::Transport("connection refused".into())),
            false => Ok(Vec::new()),
        }
    }
}

pub fn test_settings() -> Settings {
    Settings {
        jamai_project_id: "proj-test".to_string(),
        jamai_api_key: "key-test".to_string(),
        jamai_api_base: "http://127.0.0.1:0".to_string(),
        action_table_booking: "appointment-booking-table".to_string(),
        action_table_sop_qna: "sop-qna-table".to_string(),
        action_table_lookup: "medication-lookup-table".to_string(),
        knowledge_table_sop: "sop-knowledge-table".to_string(),
        knowledge_table_meds: "meds-knowledge-table".to_string(),
        knowledge_table_faqs: "faqs-knowledge-table".to_string(),
        clinic_secret_code: "TEST-SECRET".to_string(),
        clinic_config_dir: None,
        request_timeout: Duration::from_secs(1),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

pub fn state_with(backend: Arc<MockBackend>) -> Arc<AppState> {
    let gateway = ClinicGateway::new(backend, Arc::new(ClinicRegistry::new()));
    Arc::new(AppState::new(test_settings(), gateway))
}

pub fn row(pairs: &[(&str, &str)]) -> RowFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
