use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::nutrition::Macros;

use super::dto::RecipeIngredientRequest;
use super::repo_types::{Recipe, RecipeIngredientRow, RecipeInstructionRow};

const RECIPE_COLUMNS: &str = "id, name, servings, calories_per_serving, protein_per_serving, \
                              carbs_per_serving, fat_per_serving, override_nutrition";

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Recipe>, sqlx::Error> {
    sqlx::query_as::<_, Recipe>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY id LIMIT $1 OFFSET $2"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await
}

pub async fn find<'e, E: PgExecutor<'e>>(exec: E, id: i64) -> Result<Option<Recipe>, sqlx::Error> {
    sqlx::query_as::<_, Recipe>(&format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"))
        .bind(id)
        .fetch_optional(exec)
        .await
}

pub async fn lines_for(
    db: &PgPool,
    recipe_ids: &[i64],
) -> Result<Vec<RecipeIngredientRow>, sqlx::Error> {
    sqlx::query_as::<_, RecipeIngredientRow>(
        r#"
        SELECT ri.id, ri.recipe_id, ri.ingredient_id, i.name, i.unit, ri.amount, ri.note
          FROM recipe_ingredients ri
          JOIN ingredients i ON i.id = ri.ingredient_id
         WHERE ri.recipe_id = ANY($1)
         ORDER BY ri.recipe_id, ri.position
        "#,
    )
    .bind(recipe_ids)
    .fetch_all(db)
    .await
}

pub async fn instructions_for(
    db: &PgPool,
    recipe_ids: &[i64],
) -> Result<Vec<RecipeInstructionRow>, sqlx::Error> {
    sqlx::query_as::<_, RecipeInstructionRow>(
        r#"
        SELECT recipe_id, step, text
          FROM recipe_instructions
         WHERE recipe_id = ANY($1)
         ORDER BY recipe_id, step
        "#,
    )
    .bind(recipe_ids)
    .fetch_all(db)
    .await
}

pub async fn insert(
    conn: &mut PgConnection,
    name: &str,
    servings: f64,
    per_serving: Macros,
    override_nutrition: bool,
) -> Result<Recipe, sqlx::Error> {
    sqlx::query_as::<_, Recipe>(&format!(
        r#"
        INSERT INTO recipes (name, servings, calories_per_serving, protein_per_serving,
                             carbs_per_serving, fat_per_serving, override_nutrition)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {RECIPE_COLUMNS}
        "#
    ))
    .bind(name)
    .bind(servings)
    .bind(per_serving.calories)
    .bind(per_serving.protein)
    .bind(per_serving.carbs)
    .bind(per_serving.fat)
    .bind(override_nutrition)
    .fetch_one(conn)
    .await
}

pub async fn update(
    conn: &mut PgConnection,
    id: i64,
    name: &str,
    servings: f64,
    per_serving: Macros,
    override_nutrition: bool,
) -> Result<Option<Recipe>, sqlx::Error> {
    sqlx::query_as::<_, Recipe>(&format!(
        r#"
        UPDATE recipes
           SET name = $2, servings = $3, calories_per_serving = $4, protein_per_serving = $5,
               carbs_per_serving = $6, fat_per_serving = $7, override_nutrition = $8
         WHERE id = $1
        RETURNING {RECIPE_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(name)
    .bind(servings)
    .bind(per_serving.calories)
    .bind(per_serving.protein)
    .bind(per_serving.carbs)
    .bind(per_serving.fat)
    .bind(override_nutrition)
    .fetch_optional(conn)
    .await
}

/// Replaces ingredient lines and instruction steps, preserving request order.
pub async fn replace_children(
    conn: &mut PgConnection,
    recipe_id: i64,
    lines: &[RecipeIngredientRequest],
    instructions: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
        .bind(recipe_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query("DELETE FROM recipe_instructions WHERE recipe_id = $1")
        .bind(recipe_id)
        .execute(&mut *conn)
        .await?;

    for (position, line) in lines.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO recipe_ingredients (recipe_id, ingredient_id, position, amount, note)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(recipe_id)
        .bind(line.ingredient_id)
        .bind(position as i32)
        .bind(line.amount)
        .bind(line.note.as_deref())
        .execute(&mut *conn)
        .await?;
    }

    for (i, text) in instructions.iter().enumerate() {
        sqlx::query("INSERT INTO recipe_instructions (recipe_id, step, text) VALUES ($1, $2, $3)")
            .bind(recipe_id)
            .bind(i as i32 + 1)
            .bind(text)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM recipes WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}
