use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::nutrition::{MealType, Macros};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "meal_source", rename_all = "snake_case")]
pub enum SourceKind {
    CookedMeal,
    Snack,
    EatenOut,
}

/// Eaten meal with the nutrition snapshot taken when it was recorded.
///
/// `basis_*` describe `basis_servings` of the source: one serving for cooked
/// meals and snacks, the whole order for eaten-out meals.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EatenMeal {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub eaten_at: OffsetDateTime,
    pub meal_type: MealType,
    pub servings: f64,
    pub source_kind: SourceKind,
    pub source_id: i64,
    pub source_name: String,
    pub basis_calories: i32,
    pub basis_protein: f64,
    pub basis_carbs: f64,
    pub basis_fat: f64,
    pub basis_servings: f64,
}

impl EatenMeal {
    pub fn basis(&self) -> Macros {
        Macros {
            calories: self.basis_calories,
            protein: self.basis_protein,
            carbs: self.basis_carbs,
            fat: self.basis_fat,
        }
    }
}
