use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, state::AppState};

use super::dto::CookRequest;
use super::repo_types::CookedMeal;
use super::{repo, services};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cooked-meals", get(list_cooked_meals).post(cook_recipe))
        .route("/cooked-meals/:id", get(get_cooked_meal).delete(discard_cooked_meal))
}

#[instrument(skip(state))]
pub async fn list_cooked_meals(
    State(state): State<AppState>,
) -> Result<Json<Vec<CookedMeal>>, AppError> {
    Ok(Json(repo::list(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_cooked_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CookedMeal>, AppError> {
    repo::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Cooked meal"))
}

#[instrument(skip(state))]
pub async fn cook_recipe(
    State(state): State<AppState>,
    Json(payload): Json<CookRequest>,
) -> Result<(StatusCode, Json<CookedMeal>), AppError> {
    let cooked = services::cook(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(cooked)))
}

/// Throws away leftovers without recording them as eaten.
#[instrument(skip(state))]
pub async fn discard_cooked_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::delete(&state.db, id).await? {
        info!(cooked_meal_id = id, "cooked meal discarded");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Cooked meal"))
    }
}
