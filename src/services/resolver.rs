//! Book resolution - provider lookup, normalization and catalog dedup
//!
//! Providers are asked in priority order and the first non-empty answer wins.
//! The normalized record is then matched against the catalog and stored only
//! when no record with the same identity exists.

use std::sync::Arc;

use crate::domain::{BookMetadata, CatalogBook, CatalogRepository, DomainError};
use crate::modules::integrations::BookProvider;
use crate::services::book_query::BookQuery;
use crate::services::normalizer::normalize;

/// Outcome of a full resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    pub book: CatalogBook,
    /// True when this call inserted the record
    pub created: bool,
}

pub struct BookResolver {
    primary: Arc<dyn BookProvider>,
    fallback: Arc<dyn BookProvider>,
    catalog: Arc<dyn CatalogRepository>,
}

impl BookResolver {
    pub fn new(
        primary: Arc<dyn BookProvider>,
        fallback: Arc<dyn BookProvider>,
        catalog: Arc<dyn CatalogRepository>,
    ) -> Self {
        Self {
            primary,
            fallback,
            catalog,
        }
    }

    /// Ask the providers in order and normalize the first hit
    pub async fn lookup(&self, query: &BookQuery) -> Result<BookMetadata, DomainError> {
        if let Some(record) = self.primary.first_match(query).await? {
            tracing::debug!("{} returned a match", self.primary.name());
            return Ok(normalize(record));
        }

        tracing::info!(
            "{} returned nothing, trying {}",
            self.primary.name(),
            self.fallback.name()
        );

        if let Some(record) = self.fallback.first_match(query).await? {
            tracing::debug!("{} returned a match", self.fallback.name());
            return Ok(normalize(record));
        }

        Err(DomainError::NotFound)
    }

    /// Lookup, then return the existing catalog record or store a new one
    pub async fn resolve(&self, query: &BookQuery) -> Result<Resolution, DomainError> {
        let candidate = self.lookup(query).await?;

        if let Some(existing) = self.catalog.find_existing(&candidate).await? {
            tracing::info!(
                "'{}' already in catalog as #{}",
                candidate.title,
                existing.id
            );
            return Ok(Resolution {
                book: existing,
                created: false,
            });
        }

        let outcome = self.catalog.persist(candidate).await?;
        if outcome.created {
            tracing::info!(
                "Stored '{}' as #{} ({})",
                outcome.book.metadata.title,
                outcome.book.id,
                outcome.book.metadata.source.as_str()
            );
        }

        Ok(Resolution {
            book: outcome.book,
            created: outcome.created,
        })
    }
}
