use anyhow::Context;
use time::OffsetDateTime;
use tracing::info;

use crate::error::{ensure_non_negative, ensure_positive, AppError};
use crate::ingredients::Ingredient;
use crate::state::AppState;

use super::dto::AddInventoryRequest;
use super::repo;
use super::repo_types::InventoryEntry;

/// Merges into the existing (ingredient, state) entry or creates one.
pub async fn add_to_inventory(
    state: &AppState,
    req: AddInventoryRequest,
) -> Result<InventoryEntry, AppError> {
    ensure_positive("amount", req.amount)?;
    if Ingredient::find(&state.db, req.ingredient_id).await?.is_none() {
        return Err(AppError::NotFound("Ingredient"));
    }
    let purchase_date = req
        .purchase_date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let mut tx = state.db.begin().await.context("begin tx")?;
    let id = repo::upsert_add(&mut tx, req.ingredient_id, req.state, req.amount, purchase_date).await?;
    let entry = repo::find(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("inventory row {id} vanished")))?;
    tx.commit().await.context("commit tx")?;

    info!(
        inventory_id = entry.id,
        ingredient_id = entry.ingredient_id,
        state = ?entry.state,
        added = req.amount,
        amount = entry.amount,
        "inventory added"
    );
    Ok(entry)
}

/// Sets an entry's amount; zero removes the entry. Returns `None` when removed.
pub async fn set_amount(
    state: &AppState,
    id: i64,
    amount: f64,
) -> Result<Option<InventoryEntry>, AppError> {
    ensure_non_negative("amount", amount)?;

    if amount <= 0.0 {
        if !repo::delete(&state.db, id).await? {
            return Err(AppError::NotFound("Inventory entry"));
        }
        info!(inventory_id = id, "inventory entry emptied and removed");
        return Ok(None);
    }

    if !repo::set_amount(&state.db, id, amount).await? {
        return Err(AppError::NotFound("Inventory entry"));
    }
    info!(inventory_id = id, amount, "inventory amount set");
    repo::find(&state.db, id).await.map_err(AppError::from)
}
