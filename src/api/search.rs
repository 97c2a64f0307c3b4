use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::error_response;
use crate::infrastructure::AppState;
use crate::services::book_query::{BookQuery, SearchParams};

pub const NOT_FOUND_MESSAGE: &str = "No matching book found";

/// Resolve a query against the providers and store the result in the catalog
#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("q" = Option<String>, Query, description = "Free-text query"),
        ("isbn" = Option<String>, Query, description = "ISBN"),
        ("title" = Option<String>, Query, description = "Title"),
        ("author" = Option<String>, Query, description = "Author")
    ),
    responses(
        (status = 200, description = "Book found or added to the catalog"),
        (status = 400, description = "No search field given"),
        (status = 404, description = "No provider returned a match"),
        (status = 500, description = "Provider or database failure")
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = match BookQuery::from_params(params) {
        Ok(q) => q,
        Err(e) => return error_response(e, NOT_FOUND_MESSAGE),
    };

    match state.resolver.resolve(&query).await {
        Ok(resolution) => {
            let message = if resolution.created {
                "Book added to catalog"
            } else {
                "Book already in catalog"
            };
            (
                StatusCode::OK,
                Json(json!({ "message": message, "book": resolution.book })),
            )
                .into_response()
        }
        Err(e) => error_response(e, NOT_FOUND_MESSAGE),
    }
}
