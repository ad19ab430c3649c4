use sqlx::{PgExecutor, PgPool};

use super::dto::SnackRequest;
use super::Snack;

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Snack>, sqlx::Error> {
    sqlx::query_as::<_, Snack>(
        r#"
        SELECT id, name, servings, calories_per_serving, protein_per_serving, carbs_per_serving, fat_per_serving
        FROM snacks
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await
}

pub async fn find<'e, E: PgExecutor<'e>>(exec: E, id: i64) -> Result<Option<Snack>, sqlx::Error> {
    sqlx::query_as::<_, Snack>(
        r#"
        SELECT id, name, servings, calories_per_serving, protein_per_serving, carbs_per_serving, fat_per_serving
        FROM snacks
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(exec)
    .await
}

pub async fn create(db: &PgPool, req: &SnackRequest) -> Result<Snack, sqlx::Error> {
    sqlx::query_as::<_, Snack>(
        r#"
        INSERT INTO snacks (name, servings, calories_per_serving, protein_per_serving, carbs_per_serving, fat_per_serving)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, servings, calories_per_serving, protein_per_serving, carbs_per_serving, fat_per_serving
        "#,
    )
    .bind(&req.name)
    .bind(req.servings)
    .bind(req.calories_per_serving)
    .bind(req.protein_per_serving)
    .bind(req.carbs_per_serving)
    .bind(req.fat_per_serving)
    .fetch_one(db)
    .await
}

pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM snacks WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}
