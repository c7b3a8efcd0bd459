//! SeaORM entities, one per table.

pub mod buyer;
pub mod product;
pub mod role;
pub mod seller;
