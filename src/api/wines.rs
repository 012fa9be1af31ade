//! Wine proxy endpoints.
//!
//! Each handler forwards one CRUD operation to the upstream record store and
//! relays the response body with the upstream status.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiResult;
use crate::errors::{messages, AppError};
use crate::models::CreateRecords;
use crate::AppState;

/// GET /api/wines - List all wine records.
pub async fn list_wines(State(state): State<AppState>) -> ApiResult {
    let data = state.store.list().await?;
    Ok(Json(data))
}

/// POST /api/wines - Create wine records.
///
/// The body is the shared `{records:[{fields}]}` contract; it is forwarded
/// upstream as-is after deserialization.
pub async fn create_wine(
    State(state): State<AppState>,
    Json(request): Json<CreateRecords>,
) -> ApiResult {
    let data = state.store.create(&request).await?;
    Ok(Json(data))
}

/// Query parameters for delete.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub id: Option<String>,
}

/// DELETE /api/wines?id=... - Delete a wine record by id.
///
/// A missing or empty id is rejected locally; no upstream call is made.
pub async fn delete_wine(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult {
    let id = match params.id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(AppError::Validation(messages::ID_REQUIRED.to_string())),
    };

    let data = state.store.delete_by_id(id).await?;
    Ok(Json(data))
}

/// Fallback for HTTP methods the proxy does not support.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
