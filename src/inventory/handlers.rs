use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, state::AppState};

use super::dto::{AddInventoryRequest, InventoryFilter, SetAmountRequest};
use super::repo_types::InventoryEntry;
use super::{repo, services};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(list_inventory).post(add_to_inventory))
        .route("/inventory/:id", put(set_amount).delete(delete_entry))
}

#[instrument(skip(state))]
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(filter): Query<InventoryFilter>,
) -> Result<Json<Vec<InventoryEntry>>, AppError> {
    Ok(Json(repo::list(&state.db, filter.state).await?))
}

#[instrument(skip(state, payload))]
pub async fn add_to_inventory(
    State(state): State<AppState>,
    Json(payload): Json<AddInventoryRequest>,
) -> Result<Json<InventoryEntry>, AppError> {
    Ok(Json(services::add_to_inventory(&state, payload).await?))
}

/// 200 with the entry, or 204 when the new amount emptied it.
#[instrument(skip(state, payload))]
pub async fn set_amount(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SetAmountRequest>,
) -> Result<Response, AppError> {
    Ok(match services::set_amount(&state, id, payload.amount).await? {
        Some(entry) => Json(entry).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::delete(&state.db, id).await? {
        info!(inventory_id = id, "inventory entry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Inventory entry"))
    }
}
