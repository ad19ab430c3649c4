use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{error::AppError, state::AppState, summary::day_bounds};

use super::dto::{DayQuery, EatRequest};
use super::repo_types::EatenMeal;
use super::{repo, services};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/eaten-meals", get(list_eaten_meals).post(eat_meal))
        .route("/eaten-meals/:id", get(get_eaten_meal))
}

#[instrument(skip(state))]
pub async fn list_eaten_meals(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Result<Json<Vec<EatenMeal>>, AppError> {
    let (start, end) = day_bounds(q.day);
    Ok(Json(repo::list_between(&state.db, start, end).await?))
}

#[instrument(skip(state))]
pub async fn get_eaten_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EatenMeal>, AppError> {
    repo::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Eaten meal"))
}

#[instrument(skip(state, payload))]
pub async fn eat_meal(
    State(state): State<AppState>,
    Json(payload): Json<EatRequest>,
) -> Result<(StatusCode, Json<EatenMeal>), AppError> {
    let meal = services::eat(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(meal)))
}
