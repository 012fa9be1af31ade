//! HTTP client for the proxy's wine API.

use reqwest::Client;

use crate::models::{CreateRecords, RecordList, WineRecord};

/// Client-side request failure.
///
/// A request that reached the proxy but came back non-2xx is `Rejected`; one
/// that never completed is `Unreachable`. Both surface to the user through
/// the same call path.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Rejected { status: u16 },
    Unreachable(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Rejected { status } => write!(f, "request failed ({})", status),
            ApiError::Unreachable(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Unreachable(err.to_string())
    }
}

/// Typed access to the proxy's `/api/wines` surface.
pub struct CatalogApi {
    http: Client,
    base_url: String,
}

impl CatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn wines_url(&self) -> String {
        format!("{}/api/wines", self.base_url.trim_end_matches('/'))
    }

    /// Fetch the full wine list.
    pub async fn list(&self) -> Result<Vec<WineRecord>, ApiError> {
        let resp = self.http.get(self.wines_url()).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Rejected {
                status: resp.status().as_u16(),
            });
        }

        let list: RecordList = resp.json().await?;
        Ok(list.records)
    }

    /// Create records. Only success matters to the caller; the created
    /// payload is picked up by the reload that follows.
    pub async fn create(&self, body: &CreateRecords) -> Result<(), ApiError> {
        let resp = self.http.post(self.wines_url()).json(body).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Rejected {
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }

    /// Delete one record by its identifier.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.wines_url())
            .query(&[("id", id)])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Rejected {
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }
}
