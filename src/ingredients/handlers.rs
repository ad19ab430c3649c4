use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, pagination::Pagination, state::AppState};

use super::dto::IngredientRequest;
use super::repo_types::Ingredient;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ingredients", get(list_ingredients).post(create_ingredient))
        .route(
            "/ingredients/:id",
            get(get_ingredient)
                .put(update_ingredient)
                .delete(delete_ingredient),
        )
}

#[instrument(skip(state))]
pub async fn list_ingredients(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Ingredient>>, AppError> {
    let (limit, offset) = p.bounds();
    Ok(Json(Ingredient::list(&state.db, limit, offset).await?))
}

#[instrument(skip(state))]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Ingredient>, AppError> {
    Ingredient::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Ingredient"))
}

#[instrument(skip(state, payload))]
pub async fn create_ingredient(
    State(state): State<AppState>,
    Json(mut payload): Json<IngredientRequest>,
) -> Result<(StatusCode, Json<Ingredient>), AppError> {
    payload.validate()?;
    let ingredient = Ingredient::create(&state.db, &payload).await?;
    info!(ingredient_id = ingredient.id, name = %ingredient.name, "ingredient created");
    Ok((StatusCode::CREATED, Json(ingredient)))
}

#[instrument(skip(state, payload))]
pub async fn update_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<IngredientRequest>,
) -> Result<Json<Ingredient>, AppError> {
    payload.validate()?;
    Ingredient::update(&state.db, id, &payload)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Ingredient"))
}

#[instrument(skip(state))]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if Ingredient::delete(&state.db, id).await? {
        info!(ingredient_id = id, "ingredient deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Ingredient"))
    }
}
