//! Product record type.

use crate::category::Category;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Records are immutable once the catalog is loaded; there are no
/// create/update/delete operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name (non-empty).
    pub name: String,
    /// Brand name (non-empty, open set).
    pub brand: String,
    /// Product category.
    pub category: Category,
    /// Price in whole currency units; the UI renders a fixed symbol with
    /// no fractional digits.
    pub price: u32,
    /// Customer rating in [0, 5], half-star display granularity.
    pub rating: f64,
    /// URI reference to an external image resource.
    pub image: String,
    /// Optional long description.
    pub description: Option<String>,
}

impl Product {
    /// Create a new product record.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
        price: u32,
        rating: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            brand: brand.into(),
            category,
            price,
            rating,
            image: image.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Format the price for display: fixed symbol, thousands separators,
    /// no fractional digits.
    pub fn price_display(&self) -> String {
        format!("\u{09f3}{}", group_thousands(self.price))
    }

    /// Number of full stars to render.
    pub fn full_stars(&self) -> u8 {
        self.rating.floor().clamp(0.0, 5.0) as u8
    }

    /// Whether a half star follows the full stars.
    pub fn has_half_star(&self) -> bool {
        self.rating.fract() >= 0.5
    }
}

/// Insert comma separators into a whole number, e.g. 125000 -> "125,000".
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        let p = Product::new(1, "Phone", "Acme", Category::Mobile, 125000, 4.5, "img.jpg");
        assert_eq!(p.price_display(), "\u{09f3}125,000");

        let cheap = Product::new(2, "Cable", "Acme", Category::Accessories, 990, 4.0, "img.jpg");
        assert_eq!(cheap.price_display(), "\u{09f3}990");

        let free = Product::new(3, "Sticker", "Acme", Category::Accessories, 0, 5.0, "img.jpg");
        assert_eq!(free.price_display(), "\u{09f3}0");
    }

    #[test]
    fn test_star_rendering() {
        let p = Product::new(1, "Phone", "Acme", Category::Mobile, 100, 4.5, "img.jpg");
        assert_eq!(p.full_stars(), 4);
        assert!(p.has_half_star());

        let q = Product::new(2, "Pad", "Acme", Category::Tablet, 100, 4.2, "img.jpg");
        assert_eq!(q.full_stars(), 4);
        assert!(!q.has_half_star());

        let r = Product::new(3, "Top", "Acme", Category::Laptop, 100, 5.0, "img.jpg");
        assert_eq!(r.full_stars(), 5);
        assert!(!r.has_half_star());
    }

    #[test]
    fn test_description_builder() {
        let p = Product::new(1, "Phone", "Acme", Category::Mobile, 100, 4.0, "img.jpg")
            .with_description("A phone.");
        assert_eq!(p.description.as_deref(), Some("A phone."));
    }
}
