//! Open Library search API (fallback provider)

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{BookProvider, ProviderRecord};
use crate::domain::DomainError;
use crate::services::book_query::BookQuery;

pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
const NAME: &str = "openlibrary";

#[derive(Debug, Deserialize)]
struct OpenLibrarySearchResponse {
    #[serde(default)]
    docs: Vec<OpenLibraryDoc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenLibraryDoc {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub isbn: Option<Vec<String>>,
    pub cover: Option<OpenLibraryCover>,
    pub cover_i: Option<i64>,
    #[serde(alias = "publishers")]
    pub publisher: Option<Vec<String>>,
    pub publish_date: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenLibraryCover {
    pub large: Option<String>,
}

/// Large cover image for a search document's `cover_i`
pub fn cover_url_from_id(cover_id: i64) -> String {
    format!("https://covers.openlibrary.org/b/id/{}-L.jpg", cover_id)
}

pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BookProvider for OpenLibraryClient {
    async fn first_match(&self, query: &BookQuery) -> Result<Option<ProviderRecord>, DomainError> {
        let terms = query.fallback_terms();
        tracing::debug!("Open Library search q={}", terms);

        let url = format!("{}/search.json?q={}&limit=1", self.base_url, terms);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::provider(NAME, format!("Failed to send request: {}", e)))?;

        if !resp.status().is_success() {
            return Err(DomainError::provider(
                NAME,
                format!("Open Library API error: {}", resp.status()),
            ));
        }

        let parsed: OpenLibrarySearchResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::provider(NAME, format!("Failed to parse JSON: {}", e)))?;

        Ok(parsed.docs.into_iter().next().map(ProviderRecord::Fallback))
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
