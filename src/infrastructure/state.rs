//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{CatalogRepository, DomainError, ShelfRepository};
use crate::infrastructure::config::Config;
use crate::infrastructure::{SeaOrmCatalogRepository, SeaOrmShelfRepository};
use crate::modules::integrations::{build_http_client, GoogleBooksClient, OpenLibraryClient};
use crate::services::BookResolver;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Catalog repository
    pub catalog_repo: Arc<dyn CatalogRepository>,
    /// Shelf repository
    pub shelf_repo: Arc<dyn ShelfRepository>,
    /// Provider lookup + catalog dedup
    pub resolver: Arc<BookResolver>,
}

impl AppState {
    /// Create a new AppState with repositories and provider clients initialized
    pub fn new(db: DatabaseConnection, config: &Config) -> Result<Self, DomainError> {
        let catalog_repo: Arc<dyn CatalogRepository> =
            Arc::new(SeaOrmCatalogRepository::new(db.clone()));
        let shelf_repo: Arc<dyn ShelfRepository> = Arc::new(SeaOrmShelfRepository::new(db.clone()));

        let http = build_http_client(config.provider_timeout())?;
        let primary = Arc::new(GoogleBooksClient::new(
            http.clone(),
            config.google_books_url.clone(),
            config.google_books_api_key.clone(),
        ));
        let fallback = Arc::new(OpenLibraryClient::new(http, config.openlibrary_url.clone()));

        let resolver = Arc::new(BookResolver::new(primary, fallback, catalog_repo.clone()));

        Ok(Self {
            db,
            catalog_repo,
            shelf_repo,
            resolver,
        })
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
