use sqlx::{PgConnection, PgPool};
use time::OffsetDateTime;

use crate::nutrition::{MealType, Macros};

use super::repo_types::{EatenMeal, SourceKind};

const COLUMNS: &str = "id, eaten_at, meal_type, servings, source_kind, source_id, source_name, \
                       basis_calories, basis_protein, basis_carbs, basis_fat, basis_servings";

pub struct NewEatenMeal<'a> {
    pub eaten_at: OffsetDateTime,
    pub meal_type: MealType,
    pub servings: f64,
    pub source_kind: SourceKind,
    pub source_id: i64,
    pub source_name: &'a str,
    pub basis: Macros,
    pub basis_servings: f64,
}

pub async fn insert(conn: &mut PgConnection, meal: NewEatenMeal<'_>) -> Result<EatenMeal, sqlx::Error> {
    sqlx::query_as::<_, EatenMeal>(&format!(
        r#"
        INSERT INTO eaten_meals (eaten_at, meal_type, servings, source_kind, source_id, source_name,
                                 basis_calories, basis_protein, basis_carbs, basis_fat, basis_servings)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(meal.eaten_at)
    .bind(meal.meal_type)
    .bind(meal.servings)
    .bind(meal.source_kind)
    .bind(meal.source_id)
    .bind(meal.source_name)
    .bind(meal.basis.calories)
    .bind(meal.basis.protein)
    .bind(meal.basis.carbs)
    .bind(meal.basis.fat)
    .bind(meal.basis_servings)
    .fetch_one(conn)
    .await
}

/// Eaten meals with `start <= eaten_at <= end`, oldest first.
pub async fn list_between(
    db: &PgPool,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<Vec<EatenMeal>, sqlx::Error> {
    sqlx::query_as::<_, EatenMeal>(&format!(
        "SELECT {COLUMNS} FROM eaten_meals WHERE eaten_at >= $1 AND eaten_at <= $2 ORDER BY eaten_at, id"
    ))
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

pub async fn find(db: &PgPool, id: i64) -> Result<Option<EatenMeal>, sqlx::Error> {
    sqlx::query_as::<_, EatenMeal>(&format!("SELECT {COLUMNS} FROM eaten_meals WHERE id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await
}
