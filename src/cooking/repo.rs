use sqlx::{PgConnection, PgExecutor, PgPool};
use time::OffsetDateTime;

use crate::ledger::RecipeLine;

use super::repo_types::{CookedMeal, CookingLineRow};

const COOKED_SELECT: &str = r#"
    SELECT cm.id, cm.recipe_id, r.name AS recipe_name, cm.cooked_at, cm.servings_remaining
      FROM cooked_meals cm
      JOIN recipes r ON r.id = cm.recipe_id
"#;

pub async fn list(db: &PgPool) -> Result<Vec<CookedMeal>, sqlx::Error> {
    sqlx::query_as::<_, CookedMeal>(&format!("{COOKED_SELECT} ORDER BY cm.cooked_at DESC, cm.id DESC"))
        .fetch_all(db)
        .await
}

pub async fn find<'e, E: PgExecutor<'e>>(exec: E, id: i64) -> Result<Option<CookedMeal>, sqlx::Error> {
    sqlx::query_as::<_, CookedMeal>(&format!("{COOKED_SELECT} WHERE cm.id = $1"))
        .bind(id)
        .fetch_optional(exec)
        .await
}

/// Like [`find`] but holds a row lock on the cooked meal until commit.
pub async fn find_for_update(
    conn: &mut PgConnection,
    id: i64,
) -> Result<Option<CookedMeal>, sqlx::Error> {
    sqlx::query_as::<_, CookedMeal>(&format!("{COOKED_SELECT} WHERE cm.id = $1 FOR UPDATE OF cm"))
        .bind(id)
        .fetch_optional(conn)
        .await
}

/// Recipe ingredient lines in recipe order, with name and unit for messages.
pub async fn recipe_lines(conn: &mut PgConnection, recipe_id: i64) -> Result<Vec<RecipeLine>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CookingLineRow>(
        r#"
        SELECT ri.ingredient_id, i.name, i.unit, ri.amount
          FROM recipe_ingredients ri
          JOIN ingredients i ON i.id = ri.ingredient_id
         WHERE ri.recipe_id = $1
         ORDER BY ri.position
        "#,
    )
    .bind(recipe_id)
    .fetch_all(conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| RecipeLine {
            ingredient_id: r.ingredient_id,
            ingredient_name: r.name,
            unit: r.unit,
            amount: r.amount,
        })
        .collect())
}

pub async fn insert(
    conn: &mut PgConnection,
    recipe_id: i64,
    cooked_at: OffsetDateTime,
    servings: f64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO cooked_meals (recipe_id, cooked_at, servings_remaining)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(recipe_id)
    .bind(cooked_at)
    .bind(servings)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

pub async fn set_remaining(conn: &mut PgConnection, id: i64, remaining: f64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE cooked_meals SET servings_remaining = $2 WHERE id = $1")
        .bind(id)
        .bind(remaining)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn delete<'e, E: PgExecutor<'e>>(exec: E, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM cooked_meals WHERE id = $1")
        .bind(id)
        .execute(exec)
        .await?;
    Ok(res.rows_affected() > 0)
}
