use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use skillet_core::StoreError;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TagsResponse {
    /// Distinct tags in use across all recipes, sorted alphabetically.
    /// Recomputed on every call; the "(All)" choice is the client's to add.
    pub tags: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/tags",
    tag = "recipes",
    responses(
        (status = 200, description = "List of distinct tags", body = TagsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_tags(State(store): State<AppState>) -> impl IntoResponse {
    match store.distinct_tags().await {
        Ok(tags) => (StatusCode::OK, Json(TagsResponse { tags })).into_response(),
        Err(StoreError::Connection(e)) => {
            tracing::error!("Failed to fetch tags: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Database connection failed".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch tags: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch tags".to_string(),
                }),
            )
                .into_response()
        }
    }
}
