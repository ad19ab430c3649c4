pub mod dto;
pub mod handlers;
pub(crate) mod repo;

use crate::nutrition::Macros;
use crate::state::AppState;
use axum::Router;
use serde::Serialize;
use sqlx::FromRow;

/// Pre-packaged food; `servings` is the package size and is never consumed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Snack {
    pub id: i64,
    pub name: String,
    pub servings: f64,
    pub calories_per_serving: i32,
    pub protein_per_serving: f64,
    pub carbs_per_serving: f64,
    pub fat_per_serving: f64,
}

impl Snack {
    pub fn per_serving(&self) -> Macros {
        Macros {
            calories: self.calories_per_serving,
            protein: self.protein_per_serving,
            carbs: self.carbs_per_serving,
            fat: self.fat_per_serving,
        }
    }
}

pub fn router() -> Router<AppState> {
    handlers::routes()
}
