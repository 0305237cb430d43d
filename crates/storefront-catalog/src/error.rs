//! Catalog error types.

use thiserror::Error;

/// Errors detected while loading the catalog.
///
/// These are construction-time failures only: once a [`crate::Catalog`]
/// exists it is immutable and lookups degrade to `Option`, never errors.
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    /// Two records share the same identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(u32),

    /// A required text field is empty.
    #[error("product {id}: empty {field}")]
    EmptyField { id: u32, field: &'static str },

    /// Rating outside the [0, 5] interval.
    #[error("product {id}: rating {rating} out of range")]
    RatingOutOfRange { id: u32, rating: f64 },
}
