//! Custom request extractors.

mod query;

pub use query::AppQuery;
