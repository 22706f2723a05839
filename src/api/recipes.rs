use axum::{
    extract::{FromRequest, Path, Query, Request, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use super::{ApiError, AppState, RecipeForm, SearchQuery, validation};
use crate::constants::messages;
use crate::models::recipe::Category;
use crate::views;

pub async fn home() -> Html<String> {
    Html(views::home())
}

pub async fn create_form() -> Html<String> {
    Html(views::create_form())
}

pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    form: RecipeForm,
) -> Result<Response, ApiError> {
    state
        .recipes()
        .create(form.input, form.photo)
        .await
        .map_err(|e| ApiError::write_failed(e, messages::CREATE_FAILED))?;

    Ok(Redirect::to("/").into_response())
}

pub async fn all_recipes(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let recipes = state.recipes().list_all().await?;
    Ok(Html(views::recipe_list("All recipes", &recipes)))
}

pub async fn recipe_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = validation::parse_recipe_id(&id)?;
    let recipe = state.recipes().get(id).await?;
    Ok(Html(views::recipe_detail(&recipe)))
}

pub async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = validation::parse_recipe_id(&id)?;
    state
        .recipes()
        .delete(id)
        .await
        .map_err(|e| ApiError::write_failed(e, messages::DELETE_FAILED))?;

    Ok(Redirect::to("/all_recipes").into_response())
}

pub async fn update_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = validation::parse_recipe_id(&id)?;
    let recipe = state.recipes().get(id).await?;
    Ok(Html(views::update_form(&recipe)))
}

/// Looks the recipe up before reading the body, so an unknown id is a 404 even
/// when the form itself is malformed.
pub async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let id = validation::parse_recipe_id(&id)?;
    state
        .recipes()
        .get(id)
        .await
        .map_err(|e| ApiError::write_failed(e, messages::UPDATE_FAILED))?;

    let form = RecipeForm::from_request(request, &state).await?;
    let recipe = state
        .recipes()
        .update(id, form.input, form.photo)
        .await
        .map_err(|e| ApiError::write_failed(e, messages::UPDATE_FAILED))?;

    Ok(Redirect::to(&format!("/recipe_detail/{}", recipe.id)).into_response())
}

pub async fn category_recipes(
    state: Arc<AppState>,
    category: Category,
) -> Result<Html<String>, ApiError> {
    let recipes = state.recipes().list_in_category(category.as_str()).await?;
    Ok(Html(views::recipe_list(category.heading(), &recipes)))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Html<String>, ApiError> {
    let recipes = state.recipes().search(&params.q).await?;
    Ok(Html(views::search_results(&params.q, &recipes)))
}
