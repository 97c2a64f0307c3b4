//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only the canonical types, trait definitions and domain error types.

pub mod errors;
pub mod metadata;
pub mod repositories;

pub use errors::DomainError;
pub use metadata::{BookMetadata, BookSource, CatalogBook};
pub use repositories::*;
