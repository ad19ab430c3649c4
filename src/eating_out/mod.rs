pub mod dto;
pub mod handlers;
pub(crate) mod repo;

use crate::nutrition::Macros;
use crate::state::AppState;
use axum::Router;
use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Restaurant order; nutrition is for the whole order of `servings_total`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EatenOut {
    pub id: i64,
    pub restaurant: String,
    pub meal_name: String,
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
    pub servings_total: f64,
    pub servings_remaining: f64,
}

impl EatenOut {
    pub fn totals(&self) -> Macros {
        Macros {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} - {}", self.restaurant, self.meal_name)
    }
}

pub fn router() -> Router<AppState> {
    handlers::routes()
}
