//! Services Layer
//!
//! Business logic kept out of the HTTP handlers: query construction,
//! normalization of provider records and the resolution pipeline.

pub mod book_query;
pub mod normalizer;
pub mod resolver;

// Re-export for convenience
pub use book_query::{BookQuery, SearchParams};
pub use resolver::{BookResolver, Resolution};
