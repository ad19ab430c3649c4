use sqlx::{PgConnection, PgExecutor, PgPool};
use time::OffsetDateTime;

use super::dto::EatenOutRequest;
use super::EatenOut;

const COLUMNS: &str = "id, restaurant, meal_name, calories, protein, carbs, fat, \
                       recorded_at, servings_total, servings_remaining";

pub async fn list(db: &PgPool) -> Result<Vec<EatenOut>, sqlx::Error> {
    sqlx::query_as::<_, EatenOut>(&format!(
        "SELECT {COLUMNS} FROM eaten_out ORDER BY recorded_at DESC, id DESC"
    ))
    .fetch_all(db)
    .await
}

pub async fn find<'e, E: PgExecutor<'e>>(exec: E, id: i64) -> Result<Option<EatenOut>, sqlx::Error> {
    sqlx::query_as::<_, EatenOut>(&format!("SELECT {COLUMNS} FROM eaten_out WHERE id = $1"))
        .bind(id)
        .fetch_optional(exec)
        .await
}

pub async fn find_for_update(conn: &mut PgConnection, id: i64) -> Result<Option<EatenOut>, sqlx::Error> {
    sqlx::query_as::<_, EatenOut>(&format!(
        "SELECT {COLUMNS} FROM eaten_out WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await
}

pub async fn create(db: &PgPool, req: &EatenOutRequest) -> Result<EatenOut, sqlx::Error> {
    sqlx::query_as::<_, EatenOut>(&format!(
        r#"
        INSERT INTO eaten_out (restaurant, meal_name, calories, protein, carbs, fat,
                               recorded_at, servings_total, servings_remaining)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&req.restaurant)
    .bind(&req.meal_name)
    .bind(req.calories)
    .bind(req.protein)
    .bind(req.carbs)
    .bind(req.fat)
    .bind(req.recorded_at.unwrap_or_else(OffsetDateTime::now_utc))
    .bind(req.servings_total)
    .bind(req.remaining())
    .fetch_one(db)
    .await
}

pub async fn set_remaining(conn: &mut PgConnection, id: i64, remaining: f64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE eaten_out SET servings_remaining = $2 WHERE id = $1")
        .bind(id)
        .bind(remaining)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn delete<'e, E: PgExecutor<'e>>(exec: E, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM eaten_out WHERE id = $1")
        .bind(id)
        .execute(exec)
        .await?;
    Ok(res.rows_affected() > 0)
}
