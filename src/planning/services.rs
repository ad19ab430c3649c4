use anyhow::Context;
use sqlx::PgConnection;
use tracing::info;

use crate::error::AppError;
use crate::recipes::repo as recipe_repo;
use crate::snacks::repo as snack_repo;
use crate::state::AppState;

use super::dto::{PlannedMealRequest, PlannedSource, UpdatePlannedMealRequest};
use super::repo;
use super::repo_types::PlannedMeal;

async fn insert_checked(conn: &mut PgConnection, req: &PlannedMealRequest) -> Result<PlannedMeal, AppError> {
    match req.validate()? {
        PlannedSource::Recipe(id) => {
            recipe_repo::find(&mut *conn, id)
                .await?
                .ok_or(AppError::NotFound("Recipe"))?;
        }
        PlannedSource::Snack(id) => {
            snack_repo::find(&mut *conn, id)
                .await?
                .ok_or(AppError::NotFound("Snack"))?;
        }
    }

    let id = repo::insert(&mut *conn, req).await?;
    repo::find(conn, id)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("planned meal {id} vanished")))
}

pub async fn plan_meal(state: &AppState, req: PlannedMealRequest) -> Result<PlannedMeal, AppError> {
    let mut tx = state.db.begin().await.context("begin tx")?;
    let planned = insert_checked(&mut tx, &req).await?;
    tx.commit().await.context("commit tx")?;

    info!(
        planned_meal_id = planned.id,
        date = %planned.date,
        source = ?planned.source(),
        "meal planned"
    );
    Ok(planned)
}

/// Plans a batch of meals; any invalid entry rolls back the whole batch.
pub async fn plan_week(state: &AppState, reqs: Vec<PlannedMealRequest>) -> Result<Vec<PlannedMeal>, AppError> {
    let mut tx = state.db.begin().await.context("begin tx")?;
    let mut planned = Vec::with_capacity(reqs.len());
    for req in &reqs {
        planned.push(insert_checked(&mut tx, req).await?);
    }
    tx.commit().await.context("commit tx")?;

    info!(count = planned.len(), "meal plan created");
    Ok(planned)
}

pub async fn update_planned_meal(
    state: &AppState,
    id: i64,
    req: UpdatePlannedMealRequest,
) -> Result<PlannedMeal, AppError> {
    req.validate()?;

    let mut tx = state.db.begin().await.context("begin tx")?;
    if !repo::update(&mut tx, id, &req).await? {
        return Err(AppError::NotFound("Planned meal"));
    }
    let planned = repo::find(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound("Planned meal"))?;
    tx.commit().await.context("commit tx")?;

    Ok(planned)
}
