//! Buyer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Buyer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "buyers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub suspended: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Buyer {
    fn from(model: Model) -> Self {
        Buyer {
            id: model.id,
            name: model.name,
            email: model.email,
            suspended: model.suspended,
            created_at: model.created_at,
        }
    }
}

impl From<Buyer> for ActiveModel {
    fn from(buyer: Buyer) -> Self {
        ActiveModel {
            id: sea_orm::Unchanged(buyer.id),
            name: Set(buyer.name),
            email: Set(buyer.email),
            suspended: Set(buyer.suspended),
            created_at: Set(buyer.created_at),
        }
    }
}
