//! Buyer domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Buyer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Buyer {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Whether the account is suspended
    pub suspended: bool,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl Buyer {
    /// Create a freshly registered, active buyer
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            suspended: false,
            created_at: Utc::now(),
        }
    }

    /// Suspend the account
    pub fn suspend(&mut self) {
        self.suspended = true;
    }
}
