use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use skillet_core::{RecipeFilter, StoreError};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Search term matched case-insensitively against titles and tags.
    pub q: Option<String>,
    /// Exact tag the recipe must carry. Absent or blank means no filter.
    pub tag: Option<String>,
}

/// One row of the results list: what the picker shows for each recipe.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub title: String,
    pub tags: Vec<String>,
    pub ingredient_count: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Matching recipes, sorted by title", body = ListRecipesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(store): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let filter = RecipeFilter::new(params.q.as_deref(), params.tag.as_deref());

    match store.search(&filter).await {
        Ok(recipes) => {
            let recipes = recipes
                .into_iter()
                .map(|r| RecipeSummary {
                    id: r.id,
                    title: r.title,
                    tags: r.tags,
                    ingredient_count: r.ingredients.len(),
                })
                .collect();
            (StatusCode::OK, Json(ListRecipesResponse { recipes })).into_response()
        }
        Err(StoreError::Connection(e)) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Database connection failed".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
