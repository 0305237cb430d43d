//! Catalog filtering.
//!
//! A pure, order-preserving conjunction over the four filter axes.
//! Records are never mutated; the output is a fresh sequence of
//! references in catalog insertion order.

use crate::product::Product;
use crate::query::params::{BrandFilter, CategoryFilter, QueryParams};

/// Whether a single product satisfies every active filter.
pub fn matches(product: &Product, params: &QueryParams) -> bool {
    let matches_search = params.search.is_empty() || {
        let needle = params.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false)
            || product.brand.to_lowercase().contains(&needle)
    };

    let matches_brand = match &params.brand {
        BrandFilter::All => true,
        BrandFilter::Brand(brand) => product.brand == *brand,
    };

    let matches_category = match params.category {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => product.category == category,
    };

    let (min, max) = params.price_range;
    let matches_price = product.price >= min && product.price <= max;

    matches_search && matches_brand && matches_category && matches_price
}

/// Filter the catalog sequence, preserving input order.
pub fn filter<'a>(products: &'a [Product], params: &QueryParams) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, params)).collect()
}
