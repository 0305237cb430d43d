//! User-supplied query parameters and their URL round-trip.
//!
//! One instance lives per active catalog view. Parameters are created
//! from the URL query string on view mount, mutated by user interaction
//! (every mutation resets the page to 1), and re-serialized to the URL on
//! every change. Only non-default fields appear in the URL; `page` and
//! the price range stay out of it.

use crate::category::Category;
use crate::query::sort::SortKey;

/// Upper bound of the default price interval.
pub const PRICE_CEILING: u32 = 500_000;

/// Brand filter: the "All" sentinel or an exact brand name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    #[default]
    All,
    Brand(String),
}

impl BrandFilter {
    /// Parse from a URL value; empty or "All" means no filter.
    pub fn from_value(s: &str) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            BrandFilter::All
        } else {
            BrandFilter::Brand(s.to_string())
        }
    }

    /// Display label for the filter control.
    pub fn label(&self) -> &str {
        match self {
            BrandFilter::All => "All Brands",
            BrandFilter::Brand(name) => name,
        }
    }
}

/// Category filter: the "All" sentinel or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// The full query parameter set for a catalog view.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    /// Free-text search, matched case-insensitively against
    /// name/description/brand.
    pub search: String,
    /// Brand filter.
    pub brand: BrandFilter,
    /// Category filter.
    pub category: CategoryFilter,
    /// Closed price interval [min, max].
    pub price_range: (u32, u32),
    /// Sort key.
    pub sort: SortKey,
    /// 1-based page number; clamped to [1, total_pages] by the pipeline.
    pub page: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            brand: BrandFilter::All,
            category: CategoryFilter::All,
            price_range: (0, PRICE_CEILING),
            sort: SortKey::Featured,
            page: 1,
        }
    }
}

impl QueryParams {
    /// Whether every field is at its default (nothing to serialize).
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    // Mutating setters used by the view. Changing any filter/sort
    // parameter resets the page to 1; only `set_page` leaves it alone.

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_brand(&mut self, brand: BrandFilter) {
        self.brand = brand;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.price_range = (min, max);
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    // Builder-style variants for constructing parameter sets in one go.

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_brand(mut self, brand: BrandFilter) -> Self {
        self.set_brand(brand);
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.set_category(category);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.set_sort(sort);
        self
    }

    /// Parse parameters from a URL query string (no leading '?').
    ///
    /// Unknown keys and unknown category/sort values fall back to
    /// defaults rather than failing; the category value is matched
    /// case-insensitively against its slug.
    pub fn from_query_string(qs: &str) -> Self {
        let mut params = Self::default();

        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = decode_component(parts.next().unwrap_or(""));

            match key {
                "search" => params.search = value,
                "brand" => params.brand = BrandFilter::from_value(&value),
                "category" => {
                    if let Some(category) = Category::from_slug(&value) {
                        params.category = CategoryFilter::Only(category);
                    }
                }
                "sort" => params.sort = SortKey::from_str(&value),
                _ => {}
            }
        }

        params
    }

    /// Serialize the non-default fields back to a query string.
    ///
    /// Returns an empty string when everything is default so the caller
    /// can drop the '?' entirely. Category values are written as
    /// lowercase slugs.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if !self.search.is_empty() {
            pairs.push(format!("search={}", encode_component(&self.search)));
        }
        if let BrandFilter::Brand(brand) = &self.brand {
            pairs.push(format!("brand={}", encode_component(brand)));
        }
        if let CategoryFilter::Only(category) = self.category {
            pairs.push(format!("category={}", category.slug()));
        }
        if self.sort != SortKey::Featured {
            pairs.push(format!("sort={}", self.sort.as_str()));
        }

        pairs.join("&")
    }
}

/// Percent-encode a query-string component.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decode a percent-encoded query-string component; '+' means space.
pub fn decode_component(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut iter = s.bytes();

    while let Some(b) = iter.next() {
        match b {
            b'%' => {
                let hi = iter.next();
                let lo = iter.next();
                let decoded = match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        let hex = [hi, lo];
                        std::str::from_utf8(&hex)
                            .ok()
                            .and_then(|h| u8::from_str_radix(h, 16).ok())
                    }
                    _ => None,
                };
                match decoded {
                    Some(byte) => bytes.push(byte),
                    None => {
                        // Malformed escape: keep the raw bytes.
                        bytes.push(b'%');
                        bytes.extend(hi);
                        bytes.extend(lo);
                    }
                }
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(b),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_to_nothing() {
        assert_eq!(QueryParams::default().to_query_string(), "");
    }

    #[test]
    fn test_round_trip_non_default_fields() {
        let params = QueryParams::default()
            .with_search("galaxy tab")
            .with_brand(BrandFilter::Brand("Samsung".to_string()))
            .with_category(CategoryFilter::Only(Category::Tablet))
            .with_sort(SortKey::PriceAsc);

        let qs = params.to_query_string();
        let parsed = QueryParams::from_query_string(&qs);
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_category_lowercased_on_write_canonical_on_read() {
        let params =
            QueryParams::default().with_category(CategoryFilter::Only(Category::Laptop));
        let qs = params.to_query_string();
        assert_eq!(qs, "category=laptop");

        let parsed = QueryParams::from_query_string("category=Laptop");
        assert_eq!(parsed.category, CategoryFilter::Only(Category::Laptop));
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let parsed = QueryParams::from_query_string("category=widget&sort=bogus&junk=1");
        assert_eq!(parsed.category, CategoryFilter::All);
        assert_eq!(parsed.sort, SortKey::Featured);
    }

    #[test]
    fn test_page_not_serialized() {
        let mut params = QueryParams::default().with_search("phone");
        params.set_page(3);
        assert_eq!(params.to_query_string(), "search=phone");
        assert_eq!(QueryParams::from_query_string("search=phone").page, 1);
    }

    #[test]
    fn test_any_filter_change_resets_page() {
        let mut params = QueryParams::default();
        params.set_page(4);

        params.set_search("x");
        assert_eq!(params.page, 1);
        params.set_page(4);

        params.set_brand(BrandFilter::Brand("Apple".to_string()));
        assert_eq!(params.page, 1);
        params.set_page(4);

        params.set_category(CategoryFilter::Only(Category::Mobile));
        assert_eq!(params.page, 1);
        params.set_page(4);

        params.set_price_range(100, 200);
        assert_eq!(params.page, 1);
        params.set_page(4);

        params.set_sort(SortKey::Rating);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_encode_decode_component() {
        assert_eq!(encode_component("galaxy tab"), "galaxy%20tab");
        assert_eq!(decode_component("galaxy%20tab"), "galaxy tab");
        assert_eq!(decode_component("galaxy+tab"), "galaxy tab");
        assert_eq!(decode_component("100%25"), "100%");
        // Truncated escapes degrade instead of failing.
        assert_eq!(decode_component("bad%2"), "bad%2");
    }

    #[test]
    fn test_brand_all_sentinel() {
        assert_eq!(BrandFilter::from_value("All"), BrandFilter::All);
        assert_eq!(BrandFilter::from_value(""), BrandFilter::All);
        assert_eq!(
            BrandFilter::from_value("Sony"),
            BrandFilter::Brand("Sony".to_string())
        );
    }
}
