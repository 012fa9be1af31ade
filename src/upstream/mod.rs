//! Upstream record store client.
//!
//! The hosted tabular store is the source of truth for all wine records; this
//! module is the only place outbound requests are made. The bearer credential
//! never leaves this process and is attached here, per call.

use std::sync::Arc;

use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::Config;
use crate::errors::{messages, AppError};
use crate::models::CreateRecords;

/// Client for the upstream record store.
pub struct RecordStore {
    http: Client,
    config: Arc<Config>,
}

impl RecordStore {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Attach the bearer credential when one is configured.
    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Fetch all wine records.
    pub async fn list(&self) -> Result<Value, AppError> {
        let resp = self
            .authorize(self.http.get(self.config.table_url()))
            .send()
            .await?;
        relay(resp, messages::LIST_FAILED).await
    }

    /// Create records from the shared wire shape.
    pub async fn create(&self, body: &CreateRecords) -> Result<Value, AppError> {
        let resp = self
            .authorize(self.http.post(self.config.table_url()).json(body))
            .send()
            .await?;
        relay(resp, messages::CREATE_FAILED).await
    }

    /// Delete a single record by its upstream identifier.
    pub async fn delete_by_id(&self, id: &str) -> Result<Value, AppError> {
        let url = format!("{}/{}", self.config.table_url(), id);
        let resp = self.authorize(self.http.delete(url)).send().await?;
        relay(resp, messages::DELETE_FAILED).await
    }
}

/// Forward the upstream response body, translating non-success statuses into
/// the relayed error shape. A body that is not JSON surfaces as a transport
/// error.
async fn relay(resp: Response, default_msg: &str) -> Result<Value, AppError> {
    let status = resp.status();
    let data: Value = resp.json().await?;

    if status.is_success() {
        return Ok(data);
    }

    let error = match data.get("error") {
        Some(e) if !e.is_null() => e.clone(),
        _ => Value::String(default_msg.to_string()),
    };

    tracing::warn!(status = status.as_u16(), "Upstream rejected request");
    Err(AppError::Upstream {
        status: status.as_u16(),
        error,
    })
}
