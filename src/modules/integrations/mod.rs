//! External book catalog integrations

pub mod google_books;
pub mod openlibrary;
pub mod provider;

pub use google_books::GoogleBooksClient;
pub use openlibrary::OpenLibraryClient;
pub use provider::{build_http_client, BookProvider, ProviderRecord};
