//! The immutable catalog store.

use crate::category::Category;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::product::Product;
use std::collections::HashSet;

/// The static, ordered collection of product records.
///
/// Loaded once at process start and validated at the boundary; never
/// mutated afterwards. Iteration order is catalog insertion order, which
/// is also the "featured" sort order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    brands: Vec<String>,
}

impl Catalog {
    /// Load and validate a catalog.
    ///
    /// Rejects duplicate ids, empty name/brand fields, and out-of-range
    /// ratings so downstream code never has to re-check them.
    pub fn load(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id.get()));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: product.id.get(),
                    field: "name",
                });
            }
            if product.brand.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: product.id.get(),
                    field: "brand",
                });
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id.get(),
                    rating: product.rating,
                });
            }
        }

        let mut brands: Vec<String> = products
            .iter()
            .map(|p| p.brand.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        brands.sort();

        tracing::info!(count = products.len(), brands = brands.len(), "catalog loaded");

        Ok(Self { products, brands })
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id. Unknown ids are a recoverable "not found".
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Sorted distinct brand names.
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Categories available to filter on.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// The (min, max) price over the whole catalog; (0, 0) when empty.
    pub fn price_extent(&self) -> (u32, u32) {
        let min = self.products.iter().map(|p| p.price).min().unwrap_or(0);
        let max = self.products.iter().map(|p| p.price).max().unwrap_or(0);
        (min, max)
    }

    /// Products in the same category as `product`, excluding it.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
