use serde::Deserialize;

use crate::error::{ensure_non_negative, AppError};

/// Body for both create and full update.
#[derive(Debug, Deserialize)]
pub struct IngredientRequest {
    pub name: String,
    pub unit: String,
    pub calories_per_unit: i32,
    pub protein_per_unit: f64,
    pub carbs_per_unit: f64,
    pub fat_per_unit: f64,
}

impl IngredientRequest {
    pub fn validate(&mut self) -> Result<(), AppError> {
        self.name = self.name.trim().to_string();
        self.unit = self.unit.trim().to_string();
        if self.name.is_empty() {
            return Err(AppError::bad_request("name is required"));
        }
        if self.unit.is_empty() {
            return Err(AppError::bad_request("unit is required"));
        }
        if self.calories_per_unit < 0 {
            return Err(AppError::bad_request("calories_per_unit must not be negative"));
        }
        ensure_non_negative("protein_per_unit", self.protein_per_unit)?;
        ensure_non_negative("carbs_per_unit", self.carbs_per_unit)?;
        ensure_non_negative("fat_per_unit", self.fat_per_unit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> IngredientRequest {
        IngredientRequest {
            name: "  Oats ".into(),
            unit: "g".into(),
            calories_per_unit: 4,
            protein_per_unit: 0.13,
            carbs_per_unit: 0.66,
            fat_per_unit: 0.07,
        }
    }

    #[test]
    fn validate_trims_name() {
        let mut r = request();
        r.validate().unwrap();
        assert_eq!(r.name, "Oats");
    }

    #[test]
    fn validate_rejects_blank_unit_and_negative_macros() {
        let mut r = request();
        r.unit = " ".into();
        assert!(r.validate().is_err());

        let mut r = request();
        r.fat_per_unit = -1.0;
        assert!(r.validate().is_err());
    }
}
