//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod account;
pub mod buyer;
pub mod constants;
pub mod error;
pub mod product;
pub mod report;
pub mod role;
pub mod seller;

pub use account::AccountKind;
pub use buyer::Buyer;
pub use constants::*;
pub use error::DomainError;
pub use product::Product;
pub use report::SalesReport;
pub use role::Role;
pub use seller::Seller;
