//! Catalog domain types and query pipeline for the storefront.
//!
//! This crate provides the non-UI half of the product browsing experience:
//!
//! - **Catalog**: an immutable, validated collection of product records
//! - **Query**: the filter -> sort -> paginate pipeline driven by
//!   user-supplied parameters, plus lossless URL round-tripping
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let catalog = demo_catalog();
//! let params = QueryParams::default()
//!     .with_category(CategoryFilter::Only(Category::Laptop))
//!     .with_sort(SortKey::PriceAsc);
//!
//! let outcome = query::run(&catalog, &params);
//! for product in &outcome.items {
//!     println!("{} - {}", product.name, product.price_display());
//! }
//! ```

pub mod category;
pub mod data;
pub mod error;
pub mod ids;
pub mod product;
pub mod query;
pub mod store;

pub use category::Category;
pub use data::demo_catalog;
pub use error::CatalogError;
pub use ids::ProductId;
pub use product::Product;
pub use store::Catalog;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::category::Category;
    pub use crate::data::demo_catalog;
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::product::Product;
    pub use crate::query::{
        self, BrandFilter, CategoryFilter, PageInfo, PageToken, QueryOutcome, QueryParams,
        SortKey, PAGE_SIZE, PRICE_CEILING,
    };
    pub use crate::store::Catalog;
}
