//! Admin Service Library
//!
//! Marketplace moderation over HTTP: approve, block, suspend and delete
//! buyer/seller accounts, remove products and report total sales.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::AdminServiceConfig;
use crate::infra::Database;
use crate::repository::{BuyerStore, ProductStore, RoleStore, SellerStore};
use crate::service::AdminManager;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: AdminServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let database = Database::connect(&config.database).await?;
    let db_conn = database.get_connection();

    // Create repositories and service
    let admin_service = Arc::new(AdminManager::new(
        Arc::new(SellerStore::new(db_conn.clone())),
        Arc::new(BuyerStore::new(db_conn.clone())),
        Arc::new(ProductStore::new(db_conn.clone())),
        Arc::new(RoleStore::new(db_conn)),
    ));

    let app = create_router(AppState::new(admin_service, database));

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: AdminServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
