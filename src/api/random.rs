use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{ApiError, AppState, CategoryQuery, ErrorDto, RandomRecipeDto, validation};
use crate::constants::messages;
use crate::models::recipe::Recipe;

/// An empty pick is reported in the body with `200 OK`, not as an error status.
fn pick_response(recipe: Option<Recipe>, empty_message: String) -> Response {
    match recipe {
        Some(recipe) => Json(RandomRecipeDto::from(recipe)).into_response(),
        None => (StatusCode::OK, Json(ErrorDto::new(empty_message))).into_response(),
    }
}

pub async fn random_recipe(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let recipe = state.recipes().random().await?;
    Ok(pick_response(recipe, messages::NO_RECIPES.to_string()))
}

pub async fn random_recipe_by_category(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryQuery>,
) -> Result<Response, ApiError> {
    let Ok(category) = validation::require_category(params.category.as_deref()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorDto::new(messages::MISSING_CATEGORY)),
        )
            .into_response());
    };

    let recipe = state.recipes().random_in_category(category).await?;
    Ok(pick_response(
        recipe,
        format!("No recipes in category {category}"),
    ))
}
