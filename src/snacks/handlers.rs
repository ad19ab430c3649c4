use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, pagination::Pagination, state::AppState};

use super::dto::SnackRequest;
use super::{repo, Snack};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/snacks", get(list_snacks).post(create_snack))
        .route("/snacks/:id", get(get_snack).delete(delete_snack))
}

#[instrument(skip(state))]
pub async fn list_snacks(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Snack>>, AppError> {
    let (limit, offset) = p.bounds();
    Ok(Json(repo::list(&state.db, limit, offset).await?))
}

#[instrument(skip(state))]
pub async fn get_snack(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Snack>, AppError> {
    repo::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Snack"))
}

#[instrument(skip(state, payload))]
pub async fn create_snack(
    State(state): State<AppState>,
    Json(mut payload): Json<SnackRequest>,
) -> Result<(StatusCode, Json<Snack>), AppError> {
    payload.validate()?;
    let snack = repo::create(&state.db, &payload).await?;
    info!(snack_id = snack.id, name = %snack.name, "snack created");
    Ok((StatusCode::CREATED, Json(snack)))
}

#[instrument(skip(state))]
pub async fn delete_snack(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::delete(&state.db, id).await? {
        info!(snack_id = id, "snack deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Snack"))
    }
}
