use std::collections::HashMap;

use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

use crate::error::AppError;
use crate::ingredients::Ingredient;
use crate::nutrition::Macros;
use crate::state::AppState;

use super::dto::{RecipeDetails, RecipeRequest};
use super::repo;
use super::repo_types::Recipe;

/// Per-serving nutrition from Σ(per_unit × amount) / servings.
pub fn derive_per_serving<I>(parts: I, servings: f64) -> Macros
where
    I: IntoIterator<Item = (Macros, f64)>,
{
    let (mut cal, mut protein, mut carbs, mut fat) = (0.0_f64, 0.0, 0.0, 0.0);
    for (per_unit, amount) in parts {
        cal += f64::from(per_unit.calories) * amount;
        protein += per_unit.protein * amount;
        carbs += per_unit.carbs * amount;
        fat += per_unit.fat * amount;
    }
    Macros {
        calories: (cal / servings) as i32,
        protein: protein / servings,
        carbs: carbs / servings,
        fat: fat / servings,
    }
}

/// Resolves the stored nutrition and `override_nutrition` flag for a request.
async fn resolve_nutrition(db: &PgPool, req: &RecipeRequest) -> Result<(Macros, bool), AppError> {
    let ids = req.ingredient_ids();
    let found: HashMap<i64, Ingredient> = Ingredient::find_many(db, &ids)
        .await?
        .into_iter()
        .map(|i| (i.id, i))
        .collect();
    if found.len() != ids.len() {
        return Err(AppError::NotFound("Ingredient"));
    }

    if let Some(explicit) = req.explicit_nutrition()? {
        return Ok((explicit, true));
    }
    let derived = derive_per_serving(
        req.ingredients
            .iter()
            .map(|l| (found[&l.ingredient_id].per_unit(), l.amount)),
        req.servings,
    );
    Ok((derived, false))
}

pub async fn create_recipe(state: &AppState, req: RecipeRequest) -> Result<RecipeDetails, AppError> {
    let (per_serving, override_nutrition) = resolve_nutrition(&state.db, &req).await?;

    let mut tx = state.db.begin().await.context("begin tx")?;
    let recipe = repo::insert(&mut tx, &req.name, req.servings, per_serving, override_nutrition).await?;
    repo::replace_children(&mut tx, recipe.id, &req.ingredients, &req.instructions).await?;
    tx.commit().await.context("commit tx")?;

    info!(recipe_id = recipe.id, name = %recipe.name, override_nutrition, "recipe created");
    load_one(&state.db, recipe).await
}

pub async fn update_recipe(
    state: &AppState,
    id: i64,
    req: RecipeRequest,
) -> Result<RecipeDetails, AppError> {
    let (per_serving, override_nutrition) = resolve_nutrition(&state.db, &req).await?;

    let mut tx = state.db.begin().await.context("begin tx")?;
    let recipe = repo::update(&mut tx, id, &req.name, req.servings, per_serving, override_nutrition)
        .await?
        .ok_or(AppError::NotFound("Recipe"))?;
    repo::replace_children(&mut tx, recipe.id, &req.ingredients, &req.instructions).await?;
    tx.commit().await.context("commit tx")?;

    info!(recipe_id = recipe.id, "recipe updated");
    load_one(&state.db, recipe).await
}

async fn load_one(db: &PgPool, recipe: Recipe) -> Result<RecipeDetails, AppError> {
    let mut details = load_details(db, vec![recipe]).await?;
    details
        .pop()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("recipe vanished while loading")))
}

/// Attaches ingredient lines and instruction steps, keeping `recipes` order.
pub async fn load_details(db: &PgPool, recipes: Vec<Recipe>) -> Result<Vec<RecipeDetails>, AppError> {
    let ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();
    let mut lines = HashMap::<i64, Vec<_>>::new();
    for row in repo::lines_for(db, &ids).await? {
        lines.entry(row.recipe_id).or_default().push(row);
    }
    let mut steps = HashMap::<i64, Vec<_>>::new();
    for row in repo::instructions_for(db, &ids).await? {
        steps.entry(row.recipe_id).or_default().push(row);
    }

    Ok(recipes
        .into_iter()
        .map(|recipe| RecipeDetails {
            ingredients: lines.remove(&recipe.id).unwrap_or_default(),
            instructions: steps.remove(&recipe.id).unwrap_or_default(),
            recipe,
        })
        .collect())
}
