use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, state::AppState};

use super::dto::{DateRange, PlannedMealRequest, UpdatePlannedMealRequest};
use super::repo_types::PlannedMeal;
use super::{repo, services};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/planned-meals", get(list_planned_meals).post(create_planned_meal))
        .route("/planned-meals/week", post(create_week_plan))
        .route(
            "/planned-meals/:id",
            put(update_planned_meal).delete(delete_planned_meal),
        )
}

#[instrument(skip(state))]
pub async fn list_planned_meals(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> Result<Json<Vec<PlannedMeal>>, AppError> {
    range.validate()?;
    Ok(Json(
        repo::list_between(&state.db, range.start_date, range.end_date).await?,
    ))
}

#[instrument(skip(state, payload))]
pub async fn create_planned_meal(
    State(state): State<AppState>,
    Json(payload): Json<PlannedMealRequest>,
) -> Result<(StatusCode, Json<PlannedMeal>), AppError> {
    let planned = services::plan_meal(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(planned)))
}

#[instrument(skip(state, payload))]
pub async fn create_week_plan(
    State(state): State<AppState>,
    Json(payload): Json<Vec<PlannedMealRequest>>,
) -> Result<(StatusCode, Json<Vec<PlannedMeal>>), AppError> {
    for req in &payload {
        req.validate()?;
    }
    let planned = services::plan_week(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(planned)))
}

#[instrument(skip(state, payload))]
pub async fn update_planned_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePlannedMealRequest>,
) -> Result<Json<PlannedMeal>, AppError> {
    Ok(Json(services::update_planned_meal(&state, id, payload).await?))
}

#[instrument(skip(state))]
pub async fn delete_planned_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::delete(&state.db, id).await? {
        info!(planned_meal_id = id, "planned meal deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Planned meal"))
    }
}
