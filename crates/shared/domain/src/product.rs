//! Product domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Store-assigned identifier
    pub id: i64,
    /// Owning seller
    pub seller_id: i64,
    pub name: String,
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: i32,
    /// Sales amount attributed to this product, summed by the sales report
    pub total_sales: f64,
    pub created_at: DateTime<Utc>,
}
