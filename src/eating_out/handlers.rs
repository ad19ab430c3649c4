use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, state::AppState};

use super::dto::EatenOutRequest;
use super::{repo, EatenOut};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/eaten-out", get(list_eaten_out).post(record_eaten_out))
        .route("/eaten-out/:id", get(get_eaten_out).delete(delete_eaten_out))
}

#[instrument(skip(state))]
pub async fn list_eaten_out(State(state): State<AppState>) -> Result<Json<Vec<EatenOut>>, AppError> {
    Ok(Json(repo::list(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_eaten_out(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EatenOut>, AppError> {
    repo::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Eaten out meal"))
}

#[instrument(skip(state, payload))]
pub async fn record_eaten_out(
    State(state): State<AppState>,
    Json(mut payload): Json<EatenOutRequest>,
) -> Result<(StatusCode, Json<EatenOut>), AppError> {
    payload.validate()?;
    let record = repo::create(&state.db, &payload).await?;
    info!(
        eaten_out_id = record.id,
        restaurant = %record.restaurant,
        servings_total = record.servings_total,
        "eaten-out recorded"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

#[instrument(skip(state))]
pub async fn delete_eaten_out(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::delete(&state.db, id).await? {
        info!(eaten_out_id = id, "eaten-out deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Eaten out meal"))
    }
}
