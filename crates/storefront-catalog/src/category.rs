//! Product categories.
//!
//! Categories are a closed enum validated at the catalog-load boundary,
//! so casing or typo mismatches cannot silently drop products from a
//! category view. The URL wire format stays a lowercase slug
//! (`category=laptop`); display uses the canonical name (`Laptop`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mobile,
    Laptop,
    Accessories,
    Tablet,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Mobile,
        Category::Laptop,
        Category::Accessories,
        Category::Tablet,
    ];

    /// Canonical display name (e.g. "Laptop").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mobile => "Mobile",
            Category::Laptop => "Laptop",
            Category::Accessories => "Accessories",
            Category::Tablet => "Tablet",
        }
    }

    /// Lowercase slug used in URLs (e.g. "laptop").
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Mobile => "mobile",
            Category::Laptop => "laptop",
            Category::Accessories => "accessories",
            Category::Tablet => "tablet",
        }
    }

    /// Parse a slug or display name, case-insensitively.
    pub fn from_slug(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mobile" => Some(Category::Mobile),
            "laptop" => Some(Category::Laptop),
            "accessories" => Some(Category::Accessories),
            "tablet" => Some(Category::Tablet),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_slug(cat.slug()), Some(cat));
            assert_eq!(Category::from_slug(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(Category::from_slug("smartwatch"), None);
        assert_eq!(Category::from_slug(""), None);
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(Category::from_slug("LAPTOP"), Some(Category::Laptop));
        assert_eq!(Category::from_slug("TaBlEt"), Some(Category::Tablet));
    }
}
