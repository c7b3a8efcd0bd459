//! Product repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use super::save_error;
use common::{AppError, AppResult};
use domain::Product;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Find product by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// Persist all fields of an existing product
    async fn save(&self, product: Product) -> AppResult<Product>;

    /// Delete product by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    /// Sum of `total_sales` over all products (0 when there are none)
    async fn sum_total_sales(&self) -> AppResult<f64>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: Arc<DatabaseConnection>,
}

impl ProductStore {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn save(&self, product: Product) -> AppResult<Product> {
        let model = ActiveModel::from(product)
            .update(self.db.as_ref())
            .await
            .map_err(save_error)?;

        Ok(Product::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = ProductEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn sum_total_sales(&self) -> AppResult<f64> {
        // SUM over zero rows is NULL
        let total: Option<Option<f64>> = ProductEntity::find()
            .select_only()
            .column_as(product::Column::TotalSales.sum(), "total")
            .into_tuple()
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(total.flatten().unwrap_or_default())
    }
}
