//! Role catalog repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::role::{self, Entity as RoleEntity};
use common::{AppError, AppResult};
use domain::Role;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only access to the role catalog.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// List every role, ordered by name
    async fn find_all(&self) -> AppResult<Vec<Role>>;
}

pub struct RoleStore {
    db: Arc<DatabaseConnection>,
}

impl RoleStore {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_all(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(role::Column::Role)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Role::from).collect())
    }
}
