use serde::Serialize;
use sqlx::FromRow;

use crate::nutrition::Macros;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub servings: f64,
    pub calories_per_serving: i32,
    pub protein_per_serving: f64,
    pub carbs_per_serving: f64,
    pub fat_per_serving: f64,
    pub override_nutrition: bool,
}

impl Recipe {
    pub fn per_serving(&self) -> Macros {
        Macros {
            calories: self.calories_per_serving,
            protein: self.protein_per_serving,
            carbs: self.carbs_per_serving,
            fat: self.fat_per_serving,
        }
    }
}

/// Ingredient line joined with the ingredient's name and unit.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecipeIngredientRow {
    pub id: i64,
    #[serde(skip_serializing)]
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub name: String,
    pub unit: String,
    pub amount: f64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecipeInstructionRow {
    #[serde(skip_serializing)]
    pub recipe_id: i64,
    pub step: i32,
    pub text: String,
}
