use sqlx::PgPool;

use super::dto::IngredientRequest;
use super::repo_types::Ingredient;

impl Ingredient {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Ingredient>, sqlx::Error> {
        sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, name, unit, calories_per_unit, protein_per_unit, carbs_per_unit, fat_per_unit
            FROM ingredients
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    pub async fn find(db: &PgPool, id: i64) -> Result<Option<Ingredient>, sqlx::Error> {
        sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, name, unit, calories_per_unit, protein_per_unit, carbs_per_unit, fat_per_unit
            FROM ingredients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Fetches several ingredients at once; missing ids are simply absent.
    pub async fn find_many(db: &PgPool, ids: &[i64]) -> Result<Vec<Ingredient>, sqlx::Error> {
        sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, name, unit, calories_per_unit, protein_per_unit, carbs_per_unit, fat_per_unit
            FROM ingredients
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(db)
        .await
    }

    pub async fn create(db: &PgPool, req: &IngredientRequest) -> Result<Ingredient, sqlx::Error> {
        sqlx::query_as::<_, Ingredient>(
            r#"
            INSERT INTO ingredients (name, unit, calories_per_unit, protein_per_unit, carbs_per_unit, fat_per_unit)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, unit, calories_per_unit, protein_per_unit, carbs_per_unit, fat_per_unit
            "#,
        )
        .bind(&req.name)
        .bind(&req.unit)
        .bind(req.calories_per_unit)
        .bind(req.protein_per_unit)
        .bind(req.carbs_per_unit)
        .bind(req.fat_per_unit)
        .fetch_one(db)
        .await
    }

    pub async fn update(
        db: &PgPool,
        id: i64,
        req: &IngredientRequest,
    ) -> Result<Option<Ingredient>, sqlx::Error> {
        sqlx::query_as::<_, Ingredient>(
            r#"
            UPDATE ingredients
               SET name = $2, unit = $3, calories_per_unit = $4,
                   protein_per_unit = $5, carbs_per_unit = $6, fat_per_unit = $7
             WHERE id = $1
            RETURNING id, name, unit, calories_per_unit, protein_per_unit, carbs_per_unit, fat_per_unit
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.unit)
        .bind(req.calories_per_unit)
        .bind(req.protein_per_unit)
        .bind(req.carbs_per_unit)
        .bind(req.fat_per_unit)
        .fetch_optional(db)
        .await
    }

    /// Returns whether a row was deleted.
    pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let res = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
