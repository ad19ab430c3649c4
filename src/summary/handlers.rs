use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use crate::eaten::dto::DayQuery;
use crate::eaten::repo as eaten_repo;
use crate::planning::dto::DateRange;
use crate::planning::repo as planning_repo;
use crate::{error::AppError, state::AppState};

use super::dto::{MacrosSummary, PlannedDay};
use super::services::{aggregate, day_bounds, planned_days};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/macros/daily", get(daily_macros))
        .route("/macros/planned", get(planned_macros))
}

#[instrument(skip(state))]
pub async fn daily_macros(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Result<Json<MacrosSummary>, AppError> {
    let (start, end) = day_bounds(q.day);
    let meals = eaten_repo::list_between(&state.db, start, end).await?;
    debug!(day = %q.day, meals = meals.len(), "aggregating daily macros");
    Ok(Json(aggregate(q.day, &meals)))
}

#[instrument(skip(state))]
pub async fn planned_macros(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> Result<Json<Vec<PlannedDay>>, AppError> {
    range.validate()?;
    let rows = planning_repo::nutrition_between(&state.db, range.start_date, range.end_date).await?;
    Ok(Json(planned_days(&rows)))
}
