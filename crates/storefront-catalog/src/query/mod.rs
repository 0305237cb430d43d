//! The catalog query pipeline: filter -> sort -> paginate.
//!
//! Every stage is a pure function over the immutable catalog; the view
//! recomputes the whole chain on each parameter change rather than
//! owning derived state.

pub mod filter;
pub mod paginate;
pub mod params;
pub mod sort;

pub use filter::{filter, matches};
pub use paginate::{page_strip, paginate, PageInfo, PageToken, PAGE_SIZE};
pub use params::{
    decode_component, encode_component, BrandFilter, CategoryFilter, QueryParams, PRICE_CEILING,
};
pub use sort::SortKey;

use crate::product::Product;
use crate::store::Catalog;

/// One page of query results plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct QueryOutcome<'a> {
    /// The visible page of products.
    pub items: Vec<&'a Product>,
    /// Pagination metadata for display.
    pub info: PageInfo,
    /// Matching items before pagination, for stats display.
    pub matched: usize,
}

impl QueryOutcome<'_> {
    /// The visible page-number strip for this outcome.
    pub fn strip(&self) -> Vec<PageToken> {
        page_strip(self.info.page, self.info.total_pages)
    }
}

/// Run the full pipeline against the catalog.
pub fn run<'a>(catalog: &'a Catalog, params: &QueryParams) -> QueryOutcome<'a> {
    let mut filtered = filter(catalog.products(), params);
    params.sort.apply(&mut filtered);
    let matched = filtered.len();
    let (items, info) = paginate(&filtered, params.page, PAGE_SIZE);
    QueryOutcome {
        items,
        info,
        matched,
    }
}
