use serde::Serialize;
use sqlx::FromRow;

use crate::nutrition::Macros;

/// Ingredient record; nutrition is per one `unit`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub calories_per_unit: i32,
    pub protein_per_unit: f64,
    pub carbs_per_unit: f64,
    pub fat_per_unit: f64,
}

impl Ingredient {
    pub fn per_unit(&self) -> Macros {
        Macros {
            calories: self.calories_per_unit,
            protein: self.protein_per_unit,
            carbs: self.carbs_per_unit,
            fat: self.fat_per_unit,
        }
    }
}
