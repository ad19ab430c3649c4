use anyhow::Context;
use sqlx::PgConnection;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::cooking::repo as cooked_repo;
use crate::eating_out::repo as eaten_out_repo;
use crate::error::{ensure_positive, AppError};
use crate::ledger::{self, ServingsChange};
use crate::nutrition::Macros;
use crate::recipes::repo as recipe_repo;
use crate::snacks::repo as snack_repo;
use crate::state::AppState;

use super::dto::{EatRequest, EatenSource};
use super::repo::{self, NewEatenMeal};
use super::repo_types::EatenMeal;

/// Nutrition of the source at the moment it was eaten.
struct Snapshot {
    name: String,
    basis: Macros,
    basis_servings: f64,
}

/// Records an eaten meal and draws the servings from its source in one
/// transaction. Cooked meals and eaten-out orders that reach zero are removed.
pub async fn eat(state: &AppState, req: EatRequest) -> Result<EatenMeal, AppError> {
    let source = req.source()?;
    ensure_positive("servings", req.servings)?;

    let mut tx = state.db.begin().await.context("begin tx")?;

    let snapshot = match source {
        EatenSource::CookedMeal(id) => {
            let cooked = cooked_repo::find_for_update(&mut tx, id)
                .await?
                .ok_or(AppError::NotFound("Cooked meal"))?;
            let change = consume(cooked.servings_remaining, req.servings, source)?;
            let recipe = recipe_repo::find(&mut *tx, cooked.recipe_id)
                .await?
                .ok_or(AppError::NotFound("Recipe"))?;
            match change {
                ServingsChange::Remaining(left) => cooked_repo::set_remaining(&mut tx, id, left).await?,
                ServingsChange::Exhausted => {
                    cooked_repo::delete(&mut *tx, id).await?;
                }
            }
            Snapshot {
                basis: recipe.per_serving(),
                name: recipe.name,
                basis_servings: 1.0,
            }
        }
        EatenSource::Snack(id) => {
            let snack = snack_repo::find(&mut *tx, id)
                .await?
                .ok_or(AppError::NotFound("Snack"))?;
            Snapshot {
                basis: snack.per_serving(),
                name: snack.name,
                basis_servings: 1.0,
            }
        }
        EatenSource::EatenOut(id) => {
            let record = eaten_out_repo::find_for_update(&mut tx, id)
                .await?
                .ok_or(AppError::NotFound("Eaten out meal"))?;
            let change = consume(record.servings_remaining, req.servings, source)?;
            apply_eaten_out(&mut tx, id, change).await?;
            Snapshot {
                name: record.display_name(),
                basis: record.totals(),
                basis_servings: record.servings_total,
            }
        }
    };

    let meal = repo::insert(
        &mut tx,
        NewEatenMeal {
            eaten_at: req.eaten_at.unwrap_or_else(OffsetDateTime::now_utc),
            meal_type: req.meal_type,
            servings: req.servings,
            source_kind: source.kind(),
            source_id: source.id(),
            source_name: &snapshot.name,
            basis: snapshot.basis,
            basis_servings: snapshot.basis_servings,
        },
    )
    .await?;

    tx.commit().await.context("commit tx")?;

    info!(
        eaten_meal_id = meal.id,
        source = ?source,
        servings = req.servings,
        "meal eaten"
    );
    Ok(meal)
}

fn consume(remaining: f64, servings: f64, source: EatenSource) -> Result<ServingsChange, AppError> {
    ledger::consume_servings(remaining, servings).map_err(|e| {
        warn!(source = ?source, servings, remaining, "eat rejected");
        e
    })
}

async fn apply_eaten_out(conn: &mut PgConnection, id: i64, change: ServingsChange) -> Result<(), AppError> {
    match change {
        ServingsChange::Remaining(left) => eaten_out_repo::set_remaining(conn, id, left).await?,
        ServingsChange::Exhausted => {
            eaten_out_repo::delete(&mut *conn, id).await?;
        }
    }
    Ok(())
}
