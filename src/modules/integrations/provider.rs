//! Book provider trait definition

use async_trait::async_trait;
use std::time::Duration;

use super::google_books::GoogleVolumeInfo;
use super::openlibrary::OpenLibraryDoc;
use crate::domain::DomainError;
use crate::services::book_query::BookQuery;

pub const USER_AGENT: &str = concat!("Librarium/", env!("CARGO_PKG_VERSION"));

/// A provider's first hit, still in the provider's own shape
#[derive(Debug, Clone)]
pub enum ProviderRecord {
    Primary(GoogleVolumeInfo),
    Fallback(OpenLibraryDoc),
}

/// An external book catalog queried over HTTP
#[async_trait]
pub trait BookProvider: Send + Sync {
    /// First item returned for the query, if any
    async fn first_match(&self, query: &BookQuery) -> Result<Option<ProviderRecord>, DomainError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Shared HTTP client for provider calls
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| DomainError::provider("http", format!("Failed to build client: {}", e)))
}
