//! Seller database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Seller;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sellers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub store_name: String,
    pub approved: bool,
    pub suspended: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Seller {
    fn from(model: Model) -> Self {
        Seller {
            id: model.id,
            name: model.name,
            email: model.email,
            store_name: model.store_name,
            approved: model.approved,
            suspended: model.suspended,
            created_at: model.created_at,
        }
    }
}

/// Full-row update of an existing seller; the key stays unchanged.
impl From<Seller> for ActiveModel {
    fn from(seller: Seller) -> Self {
        ActiveModel {
            id: sea_orm::Unchanged(seller.id),
            name: Set(seller.name),
            email: Set(seller.email),
            store_name: Set(seller.store_name),
            approved: Set(seller.approved),
            suspended: Set(seller.suspended),
            created_at: Set(seller.created_at),
        }
    }
}
