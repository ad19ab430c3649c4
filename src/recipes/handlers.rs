use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, pagination::Pagination, state::AppState};

use super::dto::{RecipeDetails, RecipeRequest};
use super::{repo, services};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<RecipeDetails>>, AppError> {
    let (limit, offset) = p.bounds();
    let recipes = repo::list(&state.db, limit, offset).await?;
    Ok(Json(services::load_details(&state.db, recipes).await?))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeDetails>, AppError> {
    let recipe = repo::find(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Recipe"))?;
    let mut details = services::load_details(&state.db, vec![recipe]).await?;
    details.pop().map(Json).ok_or(AppError::NotFound("Recipe"))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(mut payload): Json<RecipeRequest>,
) -> Result<(StatusCode, Json<RecipeDetails>), AppError> {
    payload.validate()?;
    let details = services::create_recipe(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(details)))
}

#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<RecipeRequest>,
) -> Result<Json<RecipeDetails>, AppError> {
    payload.validate()?;
    Ok(Json(services::update_recipe(&state, id, payload).await?))
}

/// Fails with 409 while cooked meals still reference the recipe.
#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::delete(&state.db, id).await? {
        info!(recipe_id = id, "recipe deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Recipe"))
    }
}
