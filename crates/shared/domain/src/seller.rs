//! Seller domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seller account.
///
/// Two independent flags: `approved` (marketplace eligibility, toggled by
/// approve/block) and `suspended` (one-way, set by suspend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Seller {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Public storefront name
    pub store_name: String,
    /// Whether the seller may list and sell
    pub approved: bool,
    /// Whether the account is suspended
    pub suspended: bool,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl Seller {
    /// Create a freshly registered seller (unapproved, active)
    pub fn new(id: i64, name: String, email: String, store_name: String) -> Self {
        Self {
            id,
            name,
            email,
            store_name,
            approved: false,
            suspended: false,
            created_at: Utc::now(),
        }
    }

    /// Grant marketplace approval
    pub fn approve(&mut self) {
        self.approved = true;
    }

    /// Revoke marketplace approval
    pub fn block(&mut self) {
        self.approved = false;
    }

    /// Suspend the account
    pub fn suspend(&mut self) {
        self.suspended = true;
    }
}
