//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::AdminService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<dyn AdminService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(admin_service: Arc<dyn AdminService>, database: Database) -> Self {
        Self {
            admin_service,
            database,
        }
    }
}
