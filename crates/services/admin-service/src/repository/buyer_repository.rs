//! Buyer repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::buyer::{self, ActiveModel, Entity as BuyerEntity};
use super::save_error;
use common::{AppError, AppResult};
use domain::Buyer;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Buyer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BuyerRepository: Send + Sync {
    /// List every buyer, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Buyer>>;

    /// Find buyer by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Buyer>>;

    /// Persist all fields of an existing buyer
    async fn save(&self, buyer: Buyer) -> AppResult<Buyer>;

    /// Delete buyer by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of BuyerRepository
pub struct BuyerStore {
    db: Arc<DatabaseConnection>,
}

impl BuyerStore {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl BuyerRepository for BuyerStore {
    async fn find_all(&self) -> AppResult<Vec<Buyer>> {
        let models = BuyerEntity::find()
            .order_by_asc(buyer::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Buyer::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Buyer>> {
        let result = BuyerEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Buyer::from))
    }

    async fn save(&self, buyer: Buyer) -> AppResult<Buyer> {
        let model = ActiveModel::from(buyer)
            .update(self.db.as_ref())
            .await
            .map_err(save_error)?;

        Ok(Buyer::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = BuyerEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
