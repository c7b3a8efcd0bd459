//! Seller repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::seller::{self, ActiveModel, Entity as SellerEntity};
use super::save_error;
use common::{AppError, AppResult};
use domain::Seller;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Seller repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// List every seller, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Seller>>;

    /// Find seller by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Seller>>;

    /// Persist all fields of an existing seller
    async fn save(&self, seller: Seller) -> AppResult<Seller>;

    /// Delete seller by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of SellerRepository
pub struct SellerStore {
    db: Arc<DatabaseConnection>,
}

impl SellerStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl SellerRepository for SellerStore {
    async fn find_all(&self) -> AppResult<Vec<Seller>> {
        let models = SellerEntity::find()
            .order_by_asc(seller::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Seller::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Seller>> {
        let result = SellerEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Seller::from))
    }

    async fn save(&self, seller: Seller) -> AppResult<Seller> {
        let model = ActiveModel::from(seller)
            .update(self.db.as_ref())
            .await
            .map_err(save_error)?;

        Ok(Seller::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = SellerEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
