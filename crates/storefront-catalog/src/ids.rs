//! Newtype identifier for products.
//!
//! A newtype keeps raw integers out of API signatures and makes it
//! impossible to pass, say, a page number where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier, stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new ID from a raw integer.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Parse an ID from a route parameter.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u32>().ok().map(Self)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse() {
        assert_eq!(ProductId::parse("42"), Some(ProductId::new(42)));
        assert_eq!(ProductId::parse(" 7 "), Some(ProductId::new(7)));
        assert_eq!(ProductId::parse("not-a-number"), None);
        assert_eq!(ProductId::parse("-1"), None);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(12)), "12");
    }
}
