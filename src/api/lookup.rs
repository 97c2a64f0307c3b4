use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::error_response;
use super::search::NOT_FOUND_MESSAGE;
use crate::infrastructure::AppState;
use crate::services::book_query::{BookQuery, SearchParams};

/// Provider lookup only; nothing is written to the catalog
#[utoipa::path(
    get,
    path = "/api/lookup",
    params(
        ("q" = Option<String>, Query, description = "Free-text query"),
        ("isbn" = Option<String>, Query, description = "ISBN"),
        ("title" = Option<String>, Query, description = "Title"),
        ("author" = Option<String>, Query, description = "Author")
    ),
    responses(
        (status = 200, description = "Normalized provider metadata"),
        (status = 400, description = "No search field given"),
        (status = 404, description = "No provider returned a match")
    )
)]
pub async fn lookup_book(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = match BookQuery::from_params(params) {
        Ok(q) => q,
        Err(e) => return error_response(e, NOT_FOUND_MESSAGE),
    };

    match state.resolver.lookup(&query).await {
        Ok(metadata) => (StatusCode::OK, Json(json!({ "book": metadata }))).into_response(),
        Err(e) => error_response(e, NOT_FOUND_MESSAGE),
    }
}
