//! Account kind discriminator used to route user operations.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::constants::{ROLE_BUYER, ROLE_SELLER};
use crate::error::DomainError;

/// Which account collection a user operation targets.
///
/// Deserializes through [`FromStr`], so query strings accept any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum AccountKind {
    Buyer,
    Seller,
}

impl AccountKind {
    /// Wire tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Buyer => ROLE_BUYER,
            AccountKind::Seller => ROLE_SELLER,
        }
    }
}

/// Parses `"BUYER"` / `"SELLER"` in any letter case.
impl FromStr for AccountKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ROLE_BUYER) {
            Ok(AccountKind::Buyer)
        } else if s.eq_ignore_ascii_case(ROLE_SELLER) {
            Ok(AccountKind::Seller)
        } else {
            Err(DomainError::validation(format!(
                "Invalid role '{}'. Must be '{}' or '{}'",
                s, ROLE_BUYER, ROLE_SELLER
            )))
        }
    }
}

impl TryFrom<String> for AccountKind {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("BUYER".parse::<AccountKind>(), Ok(AccountKind::Buyer));
        assert_eq!("buyer".parse::<AccountKind>(), Ok(AccountKind::Buyer));
        assert_eq!("Seller".parse::<AccountKind>(), Ok(AccountKind::Seller));
        assert_eq!(" sElLeR ".parse::<AccountKind>(), Ok(AccountKind::Seller));
    }

    #[test]
    fn test_parse_rejects_unknown_roles() {
        for role in ["ADMIN", "", "buyers", "user"] {
            let err = role.parse::<AccountKind>().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{role} should be rejected");
        }
    }

    #[test]
    fn test_try_from_string_matches_parse() {
        assert_eq!(AccountKind::try_from("buyer".to_string()), Ok(AccountKind::Buyer));
        assert!(AccountKind::try_from("ADMIN".to_string()).is_err());
    }

    #[test]
    fn test_display_uses_wire_tag() {
        assert_eq!(AccountKind::Buyer.to_string(), "BUYER");
        assert_eq!(AccountKind::Seller.to_string(), "SELLER");
    }
}
