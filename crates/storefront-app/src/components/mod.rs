//! Reusable view components.

pub mod pagination;
pub mod product_card;
pub mod rating;

pub use pagination::Pagination;
pub use product_card::ProductCard;
pub use rating::RatingStars;
