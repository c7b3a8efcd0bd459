//! Admin service - marketplace moderation use cases.
//!
//! Every mutation re-reads the entity from its repository, flips one flag and
//! writes the whole row back. Nothing is cached between calls.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppResult, OptionExt};
use domain::{AccountKind, Buyer, Product, Role, SalesReport, Seller};

use crate::repository::{BuyerRepository, ProductRepository, RoleRepository, SellerRepository};

/// Admin service trait for dependency injection.
#[async_trait]
pub trait AdminService: Send + Sync {
    /// List all sellers in store order
    async fn list_sellers(&self) -> AppResult<Vec<Seller>>;

    /// List all buyers in store order
    async fn list_buyers(&self) -> AppResult<Vec<Buyer>>;

    /// Mark a seller as approved
    async fn approve_seller(&self, id: i64) -> AppResult<()>;

    /// Revoke a seller's approval
    async fn block_seller(&self, id: i64) -> AppResult<()>;

    /// Delete a buyer or seller if present
    async fn delete_user(&self, id: i64, kind: AccountKind) -> AppResult<()>;

    /// Suspend a buyer or seller
    async fn suspend_user(&self, id: i64, kind: AccountKind) -> AppResult<()>;

    /// List all products in store order
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Delete a product if present
    async fn remove_product(&self, id: i64) -> AppResult<()>;

    /// Aggregate sales across all products
    async fn sales_report(&self) -> AppResult<SalesReport>;

    /// List the role catalog
    async fn list_roles(&self) -> AppResult<Vec<Role>>;
}

/// Concrete implementation of AdminService over injected repositories.
pub struct AdminManager {
    sellers: Arc<dyn SellerRepository>,
    buyers: Arc<dyn BuyerRepository>,
    products: Arc<dyn ProductRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl AdminManager {
    /// Create new admin service instance with repositories
    pub fn new(
        sellers: Arc<dyn SellerRepository>,
        buyers: Arc<dyn BuyerRepository>,
        products: Arc<dyn ProductRepository>,
        roles: Arc<dyn RoleRepository>,
    ) -> Self {
        Self {
            sellers,
            buyers,
            products,
            roles,
        }
    }

    async fn update_seller(&self, id: i64, apply: impl FnOnce(&mut Seller)) -> AppResult<()> {
        let mut seller = self.sellers.find_by_id(id).await?.ok_or_not_found()?;
        apply(&mut seller);
        self.sellers.save(seller).await?;
        Ok(())
    }
}

#[async_trait]
impl AdminService for AdminManager {
    async fn list_sellers(&self) -> AppResult<Vec<Seller>> {
        self.sellers.find_all().await
    }

    async fn list_buyers(&self) -> AppResult<Vec<Buyer>> {
        self.buyers.find_all().await
    }

    async fn approve_seller(&self, id: i64) -> AppResult<()> {
        self.update_seller(id, Seller::approve).await?;
        info!(seller_id = id, "Seller approved");
        Ok(())
    }

    async fn block_seller(&self, id: i64) -> AppResult<()> {
        self.update_seller(id, Seller::block).await?;
        info!(seller_id = id, "Seller blocked");
        Ok(())
    }

    async fn delete_user(&self, id: i64, kind: AccountKind) -> AppResult<()> {
        let removed = match kind {
            AccountKind::Buyer => self.buyers.delete_by_id(id).await?,
            AccountKind::Seller => self.sellers.delete_by_id(id).await?,
        };

        if removed {
            info!(user_id = id, kind = %kind, "User deleted");
        } else {
            debug!(user_id = id, kind = %kind, "Delete skipped, no such user");
        }
        Ok(())
    }

    async fn suspend_user(&self, id: i64, kind: AccountKind) -> AppResult<()> {
        match kind {
            AccountKind::Buyer => {
                let mut buyer = self.buyers.find_by_id(id).await?.ok_or_not_found()?;
                buyer.suspend();
                self.buyers.save(buyer).await?;
            }
            AccountKind::Seller => self.update_seller(id, Seller::suspend).await?,
        }

        info!(user_id = id, kind = %kind, "User suspended");
        Ok(())
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.products.find_all().await
    }

    async fn remove_product(&self, id: i64) -> AppResult<()> {
        if self.products.delete_by_id(id).await? {
            info!(product_id = id, "Product removed");
        } else {
            debug!(product_id = id, "Remove skipped, no such product");
        }
        Ok(())
    }

    async fn sales_report(&self) -> AppResult<SalesReport> {
        let total = self.products.sum_total_sales().await?;
        Ok(SalesReport { total })
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.roles.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use mockall::predicate::eq;

    use common::AppError;

    use crate::repository::{
        MockBuyerRepository, MockProductRepository, MockRoleRepository, MockSellerRepository,
    };

    fn create_test_seller(id: i64) -> Seller {
        Seller {
            id,
            name: "Test Seller".to_string(),
            email: format!("seller{}@example.com", id),
            store_name: "Test Store".to_string(),
            approved: false,
            suspended: false,
            created_at: Utc::now(),
        }
    }

    fn create_test_buyer(id: i64) -> Buyer {
        Buyer::new(id, "Test Buyer".to_string(), format!("buyer{}@example.com", id))
    }

    struct Mocks {
        sellers: MockSellerRepository,
        buyers: MockBuyerRepository,
        products: MockProductRepository,
        roles: MockRoleRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                sellers: MockSellerRepository::new(),
                buyers: MockBuyerRepository::new(),
                products: MockProductRepository::new(),
                roles: MockRoleRepository::new(),
            }
        }

        fn into_service(self) -> AdminManager {
            AdminManager::new(
                Arc::new(self.sellers),
                Arc::new(self.buyers),
                Arc::new(self.products),
                Arc::new(self.roles),
            )
        }
    }

    #[tokio::test]
    async fn test_approve_seller_sets_flag_and_saves() {
        let mut mocks = Mocks::new();
        mocks
            .sellers
            .expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(create_test_seller(id))));
        mocks
            .sellers
            .expect_save()
            .withf(|s| s.id == 7 && s.approved && !s.suspended)
            .times(1)
            .returning(Ok);

        let service = mocks.into_service();
        assert!(service.approve_seller(7).await.is_ok());
    }

    #[tokio::test]
    async fn test_block_seller_clears_flag() {
        let mut mocks = Mocks::new();
        mocks.sellers.expect_find_by_id().returning(|id| {
            let mut seller = create_test_seller(id);
            seller.approved = true;
            Ok(Some(seller))
        });
        mocks
            .sellers
            .expect_save()
            .withf(|s| !s.approved)
            .times(1)
            .returning(Ok);

        let service = mocks.into_service();
        assert!(service.block_seller(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_approve_missing_seller_is_not_found_without_write() {
        let mut mocks = Mocks::new();
        mocks.sellers.expect_find_by_id().returning(|_| Ok(None));
        mocks.sellers.expect_save().never();

        let service = mocks.into_service();
        let result = service.approve_seller(99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_block_missing_seller_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.sellers.expect_find_by_id().returning(|_| Ok(None));
        mocks.sellers.expect_save().never();

        let service = mocks.into_service();
        assert!(matches!(
            service.block_seller(99).await.unwrap_err(),
            AppError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_suspend_buyer_only_touches_buyers() {
        let mut mocks = Mocks::new();
        mocks
            .buyers
            .expect_find_by_id()
            .with(eq(4))
            .returning(|id| Ok(Some(create_test_buyer(id))));
        mocks
            .buyers
            .expect_save()
            .withf(|b| b.id == 4 && b.suspended)
            .times(1)
            .returning(Ok);
        mocks.sellers.expect_find_by_id().never();
        mocks.sellers.expect_save().never();

        let service = mocks.into_service();
        assert!(service.suspend_user(4, AccountKind::Buyer).await.is_ok());
    }

    #[tokio::test]
    async fn test_suspend_seller_keeps_approval() {
        let mut mocks = Mocks::new();
        mocks.sellers.expect_find_by_id().returning(|id| {
            let mut seller = create_test_seller(id);
            seller.approved = true;
            Ok(Some(seller))
        });
        mocks
            .sellers
            .expect_save()
            .withf(|s| s.suspended && s.approved)
            .times(1)
            .returning(Ok);
        mocks.buyers.expect_find_by_id().never();

        let service = mocks.into_service();
        assert!(service.suspend_user(5, AccountKind::Seller).await.is_ok());
    }

    #[tokio::test]
    async fn test_suspend_already_suspended_buyer_succeeds() {
        let mut mocks = Mocks::new();
        mocks.buyers.expect_find_by_id().returning(|id| {
            let mut buyer = create_test_buyer(id);
            buyer.suspended = true;
            Ok(Some(buyer))
        });
        mocks
            .buyers
            .expect_save()
            .withf(|b| b.suspended)
            .times(1)
            .returning(Ok);

        let service = mocks.into_service();
        assert!(service.suspend_user(1, AccountKind::Buyer).await.is_ok());
    }

    #[tokio::test]
    async fn test_suspend_missing_user_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.buyers.expect_find_by_id().returning(|_| Ok(None));
        mocks.buyers.expect_save().never();

        let service = mocks.into_service();
        assert!(matches!(
            service.suspend_user(8, AccountKind::Buyer).await.unwrap_err(),
            AppError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_routes_by_kind() {
        let mut mocks = Mocks::new();
        mocks
            .sellers
            .expect_delete_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(true));
        mocks.buyers.expect_delete_by_id().never();

        let service = mocks.into_service();
        assert!(service.delete_user(2, AccountKind::Seller).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_silent() {
        let mut mocks = Mocks::new();
        mocks
            .buyers
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Ok(false));

        let service = mocks.into_service();
        assert!(service.delete_user(42, AccountKind::Buyer).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_product_delegates() {
        let mut mocks = Mocks::new();
        mocks
            .products
            .expect_delete_by_id()
            .with(eq(11))
            .times(1)
            .returning(|_| Ok(false));

        let service = mocks.into_service();
        assert!(service.remove_product(11).await.is_ok());
    }

    #[tokio::test]
    async fn test_sales_report_formats_total() {
        let mut mocks = Mocks::new();
        mocks
            .products
            .expect_sum_total_sales()
            .returning(|| Ok(60.0));

        let service = mocks.into_service();
        let report = service.sales_report().await.unwrap();

        assert_eq!(report.total, 60.0);
        assert_eq!(report.to_string(), "Total Sales: ₹60.00");
    }

    #[tokio::test]
    async fn test_list_sellers_passes_through_store_order() {
        let mut mocks = Mocks::new();
        mocks
            .sellers
            .expect_find_all()
            .returning(|| Ok(vec![create_test_seller(1), create_test_seller(2)]));
        mocks.sellers.expect_save().never();

        let service = mocks.into_service();
        let ids: Vec<i64> = service
            .list_sellers()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();

        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_list_roles() {
        let mut mocks = Mocks::new();
        mocks
            .roles
            .expect_find_all()
            .returning(|| Ok(vec![Role::new("BUYER", None), Role::new("SELLER", None)]));

        let service = mocks.into_service();
        assert_eq!(service.list_roles().await.unwrap().len(), 2);
    }
}
