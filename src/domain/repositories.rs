//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{BookMetadata, CatalogBook, DomainError};

/// Filter criteria for catalog listings
#[derive(Debug, Default, Clone)]
pub struct CatalogFilter {
    pub title: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Paginated result with total count
#[derive(Debug)]
pub struct PaginatedCatalog {
    pub books: Vec<CatalogBook>,
    pub total: u64,
}

/// Result of a catalog write
#[derive(Debug, Clone)]
pub struct PersistOutcome {
    pub book: CatalogBook,
    /// False when a concurrent writer stored the same identity first
    pub created: bool,
}

/// Repository trait for the shared book catalog
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Find a stored record with the same title or an overlapping ISBN
    async fn find_existing(
        &self,
        candidate: &BookMetadata,
    ) -> Result<Option<CatalogBook>, DomainError>;

    /// Insert a new record, or return the record that won a concurrent insert
    async fn persist(&self, candidate: BookMetadata) -> Result<PersistOutcome, DomainError>;

    /// Find a single record by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<CatalogBook>, DomainError>;

    /// List records matching the filter with pagination support
    async fn find_all(&self, filter: CatalogFilter) -> Result<PaginatedCatalog, DomainError>;
}

/// A catalog book placed on the shelf
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfEntry {
    pub id: i32,
    pub book_id: i32,
    pub position: i32,
    pub added_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<CatalogBook>,
}

/// Repository trait for the ordered shelf
#[async_trait]
pub trait ShelfRepository: Send + Sync {
    /// Append a catalog book at the next position
    async fn add(&self, book_id: i32) -> Result<ShelfEntry, DomainError>;

    /// All entries ordered by position
    async fn list(&self) -> Result<Vec<ShelfEntry>, DomainError>;

    /// Remove an entry by ID
    async fn remove(&self, id: i32) -> Result<(), DomainError>;
}
