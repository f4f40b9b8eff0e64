//! Product identifiers.
//!
//! Catalog ids are small positive integers; wrapping them keeps a product id
//! from being confused with a quantity or a price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new ID.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse_and_display() {
        let id: ProductId = " 7 ".parse().unwrap();
        assert_eq!(id, ProductId::new(7));
        assert_eq!(id.to_string(), "7");
        assert!("seven".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(back.get(), 3);
    }
}
