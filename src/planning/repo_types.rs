use serde::Serialize;
use sqlx::FromRow;
use time::Date;

use crate::nutrition::{MealType, Macros};

use super::dto::PlannedSource;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlannedMeal {
    pub id: i64,
    pub date: Date,
    pub meal_type: MealType,
    pub servings: f64,
    pub recipe_id: Option<i64>,
    pub snack_id: Option<i64>,
    pub source_name: String,
    pub eaten: bool,
}

impl PlannedMeal {
    pub fn source(&self) -> Option<PlannedSource> {
        match (self.recipe_id, self.snack_id) {
            (Some(id), None) => Some(PlannedSource::Recipe(id)),
            (None, Some(id)) => Some(PlannedSource::Snack(id)),
            _ => None,
        }
    }
}

/// Planned meal joined with the per-serving nutrition of its source.
#[derive(Debug, Clone, FromRow)]
pub struct PlannedNutritionRow {
    pub date: Date,
    pub servings: f64,
    pub calories_per_serving: i32,
    pub protein_per_serving: f64,
    pub carbs_per_serving: f64,
    pub fat_per_serving: f64,
}

impl PlannedNutritionRow {
    pub fn per_serving(&self) -> Macros {
        Macros {
            calories: self.calories_per_serving,
            protein: self.protein_per_serving,
            carbs: self.carbs_per_serving,
            fat: self.fat_per_serving,
        }
    }
}
