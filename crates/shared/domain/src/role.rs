//! Role catalog entry.

use serde::{Deserialize, Serialize};

/// Named role with a free-form description.
///
/// The role name is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Role {
    /// Role name, e.g. `SELLER`
    pub role: String,
    pub description: Option<String>,
}

impl Role {
    pub fn new(role: impl Into<String>, description: Option<String>) -> Self {
        Self {
            role: role.into(),
            description,
        }
    }
}
