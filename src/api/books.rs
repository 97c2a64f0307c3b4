use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::error_response;
use crate::domain::{CatalogFilter, DomainError};
use crate::infrastructure::AppState;

const NOT_FOUND_MESSAGE: &str = "Book not found";

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub title: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "Catalog books")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let filter = CatalogFilter {
        title: params.title,
        page: params.page,
        limit: params.limit,
    };

    match state.catalog_repo.find_all(filter).await {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({ "books": result.books, "total": result.total })),
        )
            .into_response(),
        Err(e) => error_response(e, NOT_FOUND_MESSAGE),
    }
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(
        ("id" = i32, Path, description = "Catalog book id")
    ),
    responses(
        (status = 200, description = "Catalog book"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.catalog_repo.find_by_id(id).await {
        Ok(Some(book)) => (StatusCode::OK, Json(json!({ "book": book }))).into_response(),
        Ok(None) => error_response(DomainError::NotFound, NOT_FOUND_MESSAGE),
        Err(e) => error_response(e, NOT_FOUND_MESSAGE),
    }
}
