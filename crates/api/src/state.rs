use std::sync::Arc;

use sigei_core::validation::registry::RuleRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sigei_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Rule registry consulted by the validation filter. Populated once
    /// at startup and injected explicitly; never mutated afterwards.
    pub rules: Arc<RuleRegistry>,
}
