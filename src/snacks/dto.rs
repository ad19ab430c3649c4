use serde::Deserialize;

use crate::error::{ensure_non_negative, AppError};

#[derive(Debug, Deserialize)]
pub struct SnackRequest {
    pub name: String,
    pub servings: f64,
    pub calories_per_serving: i32,
    pub protein_per_serving: f64,
    pub carbs_per_serving: f64,
    pub fat_per_serving: f64,
}

impl SnackRequest {
    pub fn validate(&mut self) -> Result<(), AppError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(AppError::bad_request("name is required"));
        }
        ensure_non_negative("servings", self.servings)?;
        if self.calories_per_serving < 0 {
            return Err(AppError::bad_request("calories_per_serving must not be negative"));
        }
        ensure_non_negative("protein_per_serving", self.protein_per_serving)?;
        ensure_non_negative("carbs_per_serving", self.carbs_per_serving)?;
        ensure_non_negative("fat_per_serving", self.fat_per_serving)
    }
}
