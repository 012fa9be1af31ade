//! REST API module.
//!
//! Contains the proxy routes and handlers following the browser client contract.

mod wines;

pub use wines::*;

use axum::Json;
use serde_json::Value;

/// A relayed upstream response body, or an error mapped onto the `{error}`
/// envelope with the appropriate status.
pub type ApiResult = Result<Json<Value>, crate::errors::AppError>;
