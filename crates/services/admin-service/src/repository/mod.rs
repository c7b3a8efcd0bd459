//! Repository layer for data access.
//!
//! Each entity kind gets a trait (the contract the service depends on) and a
//! SeaORM-backed store implementing it. Deletes are delete-if-present: they
//! report whether a row was removed instead of failing on a missing id.

pub mod entities;
mod buyer_repository;
mod product_repository;
mod role_repository;
mod seller_repository;

pub use buyer_repository::{BuyerRepository, BuyerStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use role_repository::{RoleRepository, RoleStore};
pub use seller_repository::{SellerRepository, SellerStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use buyer_repository::MockBuyerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use seller_repository::MockSellerRepository;

use common::AppError;
use sea_orm::DbErr;

/// Map a failed full-row update: no matching row means the id is unknown.
pub(crate) fn save_error(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => AppError::from(other),
    }
}
