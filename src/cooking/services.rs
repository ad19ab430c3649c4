use std::collections::HashMap;

use anyhow::Context;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::{ensure_positive, AppError};
use crate::inventory::repo as inventory_repo;
use crate::ledger::{self, StockLevel};
use crate::recipes::repo as recipe_repo;
use crate::state::AppState;

use super::dto::CookRequest;
use super::repo;
use super::repo_types::CookedMeal;

/// Cooks `req.servings` of a recipe: draws every ingredient from on-hand
/// inventory and records a cooked meal, all in one transaction.
pub async fn cook(state: &AppState, req: CookRequest) -> Result<CookedMeal, AppError> {
    ensure_positive("servings", req.servings)?;

    let mut tx = state.db.begin().await.context("begin tx")?;

    let recipe = recipe_repo::find(&mut *tx, req.recipe_id)
        .await?
        .ok_or(AppError::NotFound("Recipe"))?;
    let lines = repo::recipe_lines(&mut tx, recipe.id).await?;

    let mut ids: Vec<i64> = lines.iter().map(|l| l.ingredient_id).collect();
    ids.sort_unstable();
    ids.dedup();
    let stock: HashMap<i64, StockLevel> = inventory_repo::lock_on_hand(&mut tx, &ids)
        .await?
        .into_iter()
        .map(|row| {
            (
                row.ingredient_id,
                StockLevel {
                    inventory_id: row.id,
                    amount: row.amount,
                },
            )
        })
        .collect();

    let changes = ledger::plan_cook(recipe.servings, req.servings, &lines, &stock).map_err(|e| {
        warn!(recipe_id = recipe.id, servings = req.servings, error = %e, "cook rejected");
        e
    })?;
    inventory_repo::apply_changes(&mut tx, &changes).await?;

    let cooked_at = req.cooked_at.unwrap_or_else(OffsetDateTime::now_utc);
    let id = repo::insert(&mut tx, recipe.id, cooked_at, req.servings).await?;
    let cooked = repo::find(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("cooked meal {id} vanished")))?;

    tx.commit().await.context("commit tx")?;

    info!(
        cooked_meal_id = cooked.id,
        recipe_id = recipe.id,
        servings = req.servings,
        inventory_changes = changes.len(),
        "recipe cooked"
    );
    Ok(cooked)
}
