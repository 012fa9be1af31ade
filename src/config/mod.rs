//! Configuration module for the cellar backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.
//! The upstream credential is read exactly once at startup and carried in the
//! config struct; handlers never touch the environment themselves.

use std::env;
use std::fmt;
use std::net::SocketAddr;

/// Default upstream endpoint for the hosted record store.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.airtable.com/v0";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the upstream record store API
    pub upstream_url: String,
    /// Upstream base identifier
    pub base_id: String,
    /// Upstream table name holding the wine records
    pub table_name: String,
    /// Bearer token for the upstream API (required in production)
    pub api_token: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let upstream_url =
            env::var("CELLAR_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let base_id = env::var("CELLAR_BASE_ID").unwrap_or_default();

        let table_name = env::var("CELLAR_TABLE_NAME").unwrap_or_else(|_| "Wines".to_string());

        let api_token = env::var("CELLAR_API_TOKEN").ok();

        let bind_addr = env::var("CELLAR_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid CELLAR_BIND_ADDR format");

        let log_level = env::var("CELLAR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            upstream_url,
            base_id,
            table_name,
            api_token,
            bind_addr,
            log_level,
        }
    }

    /// URL of the wine table on the upstream store.
    pub fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.upstream_url.trim_end_matches('/'),
            self.base_id,
            self.table_name
        )
    }
}

// The token must never appear in logs, so Debug is written by hand.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("upstream_url", &self.upstream_url)
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .finish()
    }
}
