//! Wine Cellar Catalog Backend
//!
//! A REST proxy in front of a hosted tabular record store, plus the headless
//! client controller that drives the catalog page against it. The upstream
//! credential lives only in this process; the browser never sees it.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod upstream;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use upstream::RecordStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes; anything other than list/create/delete gets the fixed 405
    let api_routes = Router::new().route(
        "/wines",
        get(api::list_wines)
            .post(api::create_wine)
            .delete(api::delete_wine)
            .fallback(api::method_not_allowed),
    );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
