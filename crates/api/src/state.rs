use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` (or the test harness) and cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened at startup and closed at shutdown.
    pub pool: classtrack_db::DbPool,
    /// Server configuration (secret key, session TTL, profile).
    pub config: Arc<ServerConfig>,
}
