use sqlx::{PgConnection, PgPool};
use time::Date;

use super::dto::{PlannedMealRequest, UpdatePlannedMealRequest};
use super::repo_types::{PlannedMeal, PlannedNutritionRow};

const PLANNED_SELECT: &str = r#"
    SELECT pm.id, pm.date, pm.meal_type, pm.servings, pm.recipe_id, pm.snack_id,
           COALESCE(r.name, s.name) AS source_name, pm.eaten
      FROM planned_meals pm
      LEFT JOIN recipes r ON r.id = pm.recipe_id
      LEFT JOIN snacks s ON s.id = pm.snack_id
"#;

pub async fn list_between(db: &PgPool, start: Date, end: Date) -> Result<Vec<PlannedMeal>, sqlx::Error> {
    sqlx::query_as::<_, PlannedMeal>(&format!(
        "{PLANNED_SELECT} WHERE pm.date >= $1 AND pm.date <= $2 ORDER BY pm.date, pm.meal_type, pm.id"
    ))
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

pub async fn find(conn: &mut PgConnection, id: i64) -> Result<Option<PlannedMeal>, sqlx::Error> {
    sqlx::query_as::<_, PlannedMeal>(&format!("{PLANNED_SELECT} WHERE pm.id = $1"))
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn insert(conn: &mut PgConnection, req: &PlannedMealRequest) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO planned_meals (date, meal_type, servings, recipe_id, snack_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(req.date)
    .bind(req.meal_type)
    .bind(req.servings)
    .bind(req.recipe_id)
    .bind(req.snack_id)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

/// Returns false when no planned meal has this id.
pub async fn update(
    conn: &mut PgConnection,
    id: i64,
    req: &UpdatePlannedMealRequest,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query(
        r#"
        UPDATE planned_meals
           SET date      = COALESCE($2, date),
               meal_type = COALESCE($3, meal_type),
               servings  = COALESCE($4, servings),
               eaten     = COALESCE($5, eaten)
         WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(req.date)
    .bind(req.meal_type)
    .bind(req.servings)
    .bind(req.eaten)
    .execute(conn)
    .await?;
    Ok(res.rows_affected() > 0)
}

pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM planned_meals WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}

pub async fn nutrition_between(
    db: &PgPool,
    start: Date,
    end: Date,
) -> Result<Vec<PlannedNutritionRow>, sqlx::Error> {
    sqlx::query_as::<_, PlannedNutritionRow>(
        r#"
        SELECT pm.date, pm.servings,
               COALESCE(r.calories_per_serving, s.calories_per_serving) AS calories_per_serving,
               COALESCE(r.protein_per_serving, s.protein_per_serving)   AS protein_per_serving,
               COALESCE(r.carbs_per_serving, s.carbs_per_serving)       AS carbs_per_serving,
               COALESCE(r.fat_per_serving, s.fat_per_serving)           AS fat_per_serving
          FROM planned_meals pm
          LEFT JOIN recipes r ON r.id = pm.recipe_id
          LEFT JOIN snacks s ON s.id = pm.snack_id
         WHERE pm.date >= $1 AND pm.date <= $2
         ORDER BY pm.date, pm.id
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}
