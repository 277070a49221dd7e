//! Application state for the Auth API service.

use std::sync::Arc;

use libris_auth_core::AuthService;
use libris_db::pg::{PgRoleRepository, PgUserRepository};
use libris_db::DbPool;

use crate::config::Config;

/// Type alias for the auth service with concrete repository types
pub type AuthServiceImpl = AuthService<PgUserRepository, PgRoleRepository>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Credential service (registration and login)
    pub auth: Arc<AuthServiceImpl>,
    /// Database connection pool (readiness probe)
    pub pool: DbPool,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: AuthServiceImpl, pool: DbPool, config: Config) -> Self {
        Self {
            auth: Arc::new(auth),
            pool,
            config: Arc::new(config),
        }
    }

    /// Get request timeout from config
    pub fn request_timeout(&self) -> std::time::Duration {
        self.config.request_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
