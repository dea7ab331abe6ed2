//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction. There is
//! no process-wide singleton: everything a handler needs arrives through this struct.

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - the key strings are cloned once per request
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used for geocoding and payment provider calls.
    pub http_client: reqwest::Client,

    /// Payment provider secret key, when configured.
    pub revolut_api_key: Option<String>,

    /// OpenCage geocoding key, when configured.
    pub opencage_api_key: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the result is handed to the Axum router.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `config` - Application configuration holding the provider keys
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            revolut_api_key: config.revolut_secret_api_key.clone(),
            opencage_api_key: config.opencage_api_key.clone(),
        }
    }
}
