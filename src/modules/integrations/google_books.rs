//! Google Books volumes API (primary provider)

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{BookProvider, ProviderRecord};
use crate::domain::DomainError;
use crate::services::book_query::BookQuery;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";
const NAME: &str = "google_books";

#[derive(Debug, Deserialize)]
struct GoogleBooksResponse {
    items: Option<Vec<GoogleBookItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleBookItem {
    #[serde(rename = "volumeInfo", default)]
    volume_info: GoogleVolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleVolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub industry_identifiers: Option<Vec<GoogleIndustryIdentifier>>,
    pub page_count: Option<i64>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<i64>,
    pub image_links: Option<GoogleImageLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleIndustryIdentifier {
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleImageLinks {
    pub thumbnail: Option<String>,
    // smallThumbnail is also available but often too small
}

pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleBooksClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl BookProvider for GoogleBooksClient {
    async fn first_match(&self, query: &BookQuery) -> Result<Option<ProviderRecord>, DomainError> {
        let terms = query.primary_terms();
        tracing::debug!("Google Books search q={}", terms);

        let mut url = format!("{}/volumes?q={}", self.base_url, terms);
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(&urlencoding::encode(key));
        }

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::provider(NAME, format!("Failed to send request: {}", e)))?;

        if !resp.status().is_success() {
            return Err(DomainError::provider(
                NAME,
                format!("Google Books API returned status: {}", resp.status()),
            ));
        }

        let parsed: GoogleBooksResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::provider(NAME, format!("Failed to parse JSON: {}", e)))?;

        Ok(parsed
            .items
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|item| ProviderRecord::Primary(item.volume_info)))
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
