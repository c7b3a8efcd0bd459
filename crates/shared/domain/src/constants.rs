//! Domain-level constants.
//!
//! These constants define business rules and wire-level tags.

// =============================================================================
// Account Kinds
// =============================================================================

/// Tag selecting the buyer collection
pub const ROLE_BUYER: &str = "BUYER";

/// Tag selecting the seller collection
pub const ROLE_SELLER: &str = "SELLER";

/// Operator role, seeded in the role catalog but never an account kind
pub const ROLE_ADMIN: &str = "ADMIN";

// =============================================================================
// Reporting
// =============================================================================

/// Currency symbol prefixed to monetary totals
pub const CURRENCY_SYMBOL: &str = "₹";

/// Label of the sales report line
pub const SALES_REPORT_LABEL: &str = "Total Sales";
