//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The request cannot be served as given (e.g. no search field)
    #[error("Validation error: {0}")]
    Validation(String),
    /// Resource not found
    #[error("Resource not found")]
    NotFound,
    /// The resource already exists in a conflicting state
    #[error("Conflict: {0}")]
    Conflict(String),
    /// An outbound provider call failed
    #[error("Provider {provider} failed: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn provider(provider: &'static str, message: impl Into<String>) -> Self {
        DomainError::Provider {
            provider,
            message: message.into(),
        }
    }

    /// Provider and database failures are both reported as transport errors.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::Provider { .. } | DomainError::Database(_)
        )
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
