//! JamAI Base API client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use mediflow_core::GatewayError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::backend::{RowFields, TableBackend};

const ACTION_ROWS_PATH: &str = "/api/v1/gen_tables/action/rows/add";
const KNOWLEDGE_SEARCH_PATH: &str = "/api/v1/gen_tables/knowledge/hybrid_search";

#[derive(Serialize)]
struct RowAddRequest<'a> {
    table_id: &'a str,
    data: Vec<RowFields>,
    stream: bool,
}

#[derive(Deserialize)]
struct RowAddResponse {
    rows: Vec<RowResult>,
}

#[derive(Deserialize)]
struct RowResult {
    columns: HashMap<String, ColumnValue>,
}

#[derive(Deserialize)]
struct ColumnValue {
    text: Option<String>,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    table_id: &'a str,
    query: &'a str,
    k: u8,
}

#[derive(Deserialize)]
struct SearchResponse {
    rows: Vec<HashMap<String, serde_json::Value>>,
}

/// HTTP client for the JamAI Base table API.
pub struct JamaiClient {
    client: Client,
    api_base: String,
    project_id: String,
    token: String,
}

impl JamaiClient {
    /// Creates a new client. The transport timeout comes from configuration
    /// rather than being hard-coded.
    pub fn new(
        api_base: &str,
        project_id: &str,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            token: token.to_string(),
        })
    }

    async fn post<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, GatewayError>
    where
        Req: Serialize,
        Resp: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .post(format!("{}{}", self.api_base, path))
            .bearer_auth(&self.token)
            .header("x-project-id", &self.project_id)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TableBackend for JamaiClient {
    async fn add_action_row(
        &self,
        table_id: &str,
        fields: RowFields,
    ) -> Result<RowFields, GatewayError> {
        let request = RowAddRequest {
            table_id,
            data: vec![fields],
            stream: false,
        };

        let response: RowAddResponse = self.post(ACTION_ROWS_PATH, &request).await?;
        let row = response
            .rows
            .into_iter()
            .next()
            .ok_or(GatewayError::EmptyResponse)?;

        Ok(row
            .columns
            .into_iter()
            .map(|(name, value)| (name, value.text.unwrap_or_default()))
            .collect())
    }

    async fn search_knowledge(
        &self,
        table_id: &str,
        query: &str,
        k: u8,
    ) -> Result<Vec<RowFields>, GatewayError> {
        let request = SearchRequest { table_id, query, k };
        let response: SearchResponse = self.post(KNOWLEDGE_SEARCH_PATH, &request).await?;

        Ok(response.rows.into_iter().map(stringify_row).collect())
    }
}

/// Search rows come back as loosely typed JSON; flatten every value to the
/// string form the callers work with.
fn stringify_row(row: HashMap<String, serde_json::Value>) -> RowFields {
    row.into_iter()
        .map(|(name, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (name, text)
        })
        .collect()
}
