pub mod books;
pub mod health;
pub mod lookup;
pub mod search;
pub mod shelf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Provider resolution
        .route("/search", get(search::search_books))
        .route("/lookup", get(lookup::lookup_book))
        // Catalog
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::get_book))
        // Shelf
        .route("/shelf", get(shelf::list_shelf).post(shelf::add_to_shelf))
        .route("/shelf/:id", delete(shelf::remove_from_shelf))
        .with_state(state)
}

/// Map a domain error to a JSON error response.
///
/// Transport failures are logged and flattened to a static message so the
/// cause never reaches the client.
pub fn error_response(err: DomainError, not_found_message: &str) -> Response {
    let (status, message) = match &err {
        DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        DomainError::NotFound => (StatusCode::NOT_FOUND, not_found_message.to_string()),
        DomainError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
        DomainError::Provider { .. } | DomainError::Database(_) => {
            tracing::error!("Request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, Json(json!({ "error": message }))).into_response()
}
