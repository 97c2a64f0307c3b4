use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::error_response;
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToShelfRequest {
    pub book_id: i32,
}

#[utoipa::path(
    get,
    path = "/api/shelf",
    responses(
        (status = 200, description = "Shelf entries ordered by position")
    )
)]
pub async fn list_shelf(State(state): State<AppState>) -> impl IntoResponse {
    match state.shelf_repo.list().await {
        Ok(entries) => (
            StatusCode::OK,
            Json(json!({ "total": entries.len(), "entries": entries })),
        )
            .into_response(),
        Err(e) => error_response(e, "Shelf not found"),
    }
}

#[utoipa::path(
    post,
    path = "/api/shelf",
    request_body = AddToShelfRequest,
    responses(
        (status = 201, description = "Book added to shelf"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book already on shelf")
    )
)]
pub async fn add_to_shelf(
    State(state): State<AppState>,
    Json(payload): Json<AddToShelfRequest>,
) -> impl IntoResponse {
    match state.shelf_repo.add(payload.book_id).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Book added to shelf", "entry": entry })),
        )
            .into_response(),
        Err(e) => error_response(e, "Book not found"),
    }
}

#[utoipa::path(
    delete,
    path = "/api/shelf/{id}",
    params(
        ("id" = i32, Path, description = "Shelf entry id")
    ),
    responses(
        (status = 200, description = "Book removed from shelf"),
        (status = 404, description = "Shelf entry not found")
    )
)]
pub async fn remove_from_shelf(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.shelf_repo.remove(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Book removed from shelf" })),
        )
            .into_response(),
        Err(e) => error_response(e, "Shelf entry not found"),
    }
}
