//! Sort keys for the catalog view.

use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Catalog insertion order, unchanged.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Rating, high to low.
    Rating,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
}

impl SortKey {
    /// All keys, in menu order.
    pub const ALL: [SortKey; 6] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    /// URL wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
            SortKey::Rating => "rating",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    /// Parse a URL wire value; unknown values fall back to Featured.
    pub fn from_str(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceAsc,
            "price-high" => SortKey::PriceDesc,
            "rating" => SortKey::Rating,
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            _ => SortKey::Featured,
        }
    }

    /// Label for the sort menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::NameAsc => "Name: A to Z",
            SortKey::NameDesc => "Name: Z to A",
        }
    }

    /// Sort a filtered sequence in place.
    ///
    /// Uses the standard library's stable sort, so ties keep their
    /// relative input order; `Featured` leaves the sequence untouched.
    pub fn apply(&self, products: &mut [&Product]) {
        match self {
            SortKey::Featured => {}
            SortKey::PriceAsc => products.sort_by_key(|p| p.price),
            SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => products.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
            SortKey::NameAsc => products.sort_by(|a, b| name_cmp(a, b)),
            SortKey::NameDesc => products.sort_by(|a, b| name_cmp(b, a)),
        }
    }
}

/// Case-insensitive lexicographic name comparison.
fn name_cmp(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn product(id: u32, name: &str, price: u32, rating: f64) -> Product {
        Product::new(id, name, "Acme", Category::Mobile, price, rating, "img.jpg")
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_wire_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), key);
        }
        assert_eq!(SortKey::from_str("garbage"), SortKey::Featured);
    }

    #[test]
    fn test_price_ordering_scenario() {
        // Catalog prices {100, 500, 250} per the browsing contract.
        let items = [
            product(1, "A", 100, 4.0),
            product(2, "B", 500, 4.0),
            product(3, "C", 250, 4.0),
        ];
        let mut refs: Vec<&Product> = items.iter().collect();

        SortKey::PriceAsc.apply(&mut refs);
        assert_eq!(
            refs.iter().map(|p| p.price).collect::<Vec<_>>(),
            vec![100, 250, 500]
        );

        let mut refs: Vec<&Product> = items.iter().collect();
        SortKey::PriceDesc.apply(&mut refs);
        assert_eq!(
            refs.iter().map(|p| p.price).collect::<Vec<_>>(),
            vec![500, 250, 100]
        );
    }

    #[test]
    fn test_featured_preserves_input_order() {
        let items = [
            product(3, "C", 10, 1.0),
            product(1, "A", 30, 3.0),
            product(2, "B", 20, 2.0),
        ];
        let mut refs: Vec<&Product> = items.iter().collect();
        SortKey::Featured.apply(&mut refs);
        assert_eq!(ids(&refs), vec![3, 1, 2]);
    }

    #[test]
    fn test_stability_on_equal_keys() {
        // Equal prices: relative input order must survive.
        let items = [
            product(1, "A", 100, 4.0),
            product(2, "B", 100, 4.0),
            product(3, "C", 50, 4.0),
            product(4, "D", 100, 4.0),
        ];
        let mut refs: Vec<&Product> = items.iter().collect();
        SortKey::PriceAsc.apply(&mut refs);
        assert_eq!(ids(&refs), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_name_ordering_case_insensitive() {
        let items = [
            product(1, "zephyr", 1, 1.0),
            product(2, "Alpha", 1, 1.0),
            product(3, "beta", 1, 1.0),
        ];
        let mut refs: Vec<&Product> = items.iter().collect();
        SortKey::NameAsc.apply(&mut refs);
        assert_eq!(ids(&refs), vec![2, 3, 1]);

        let mut refs: Vec<&Product> = items.iter().collect();
        SortKey::NameDesc.apply(&mut refs);
        assert_eq!(ids(&refs), vec![1, 3, 2]);
    }

    #[test]
    fn test_rating_descending() {
        let items = [
            product(1, "A", 1, 3.5),
            product(2, "B", 1, 5.0),
            product(3, "C", 1, 4.0),
        ];
        let mut refs: Vec<&Product> = items.iter().collect();
        SortKey::Rating.apply(&mut refs);
        assert_eq!(ids(&refs), vec![2, 3, 1]);
    }
}
