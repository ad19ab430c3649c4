use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, AppError};
use crate::nutrition::Macros;

use super::repo_types::{Recipe, RecipeIngredientRow, RecipeInstructionRow};

#[derive(Debug, Deserialize)]
pub struct RecipeIngredientRequest {
    pub ingredient_id: i64,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
}

/// Create/update body. Per-serving nutrition is either given in full or
/// left out entirely, in which case it is derived from the ingredients.
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub name: String,
    pub servings: f64,
    pub calories_per_serving: Option<i32>,
    pub protein_per_serving: Option<f64>,
    pub carbs_per_serving: Option<f64>,
    pub fat_per_serving: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientRequest>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl RecipeRequest {
    pub fn validate(&mut self) -> Result<(), AppError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(AppError::bad_request("name is required"));
        }
        ensure_positive("servings", self.servings)?;
        for line in &self.ingredients {
            ensure_non_negative("ingredient amount", line.amount)?;
        }
        if let Some(m) = self.explicit_nutrition()? {
            if m.calories < 0 {
                return Err(AppError::bad_request("calories_per_serving must not be negative"));
            }
            ensure_non_negative("protein_per_serving", m.protein)?;
            ensure_non_negative("carbs_per_serving", m.carbs)?;
            ensure_non_negative("fat_per_serving", m.fat)?;
        }
        Ok(())
    }

    /// `Ok(None)` when no nutrition field is present.
    pub fn explicit_nutrition(&self) -> Result<Option<Macros>, AppError> {
        match (
            self.calories_per_serving,
            self.protein_per_serving,
            self.carbs_per_serving,
            self.fat_per_serving,
        ) {
            (Some(calories), Some(protein), Some(carbs), Some(fat)) => Ok(Some(Macros {
                calories,
                protein,
                carbs,
                fat,
            })),
            (None, None, None, None) => Ok(None),
            _ => Err(AppError::bad_request(
                "per-serving nutrition must be given in full or not at all",
            )),
        }
    }

    pub fn ingredient_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.ingredients.iter().map(|l| l.ingredient_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeDetails {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub ingredients: Vec<RecipeIngredientRow>,
    pub instructions: Vec<RecipeInstructionRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RecipeRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Oatmeal",
            "servings": 2.0,
            "ingredients": [{ "ingredient_id": 1, "amount": 100.0 }],
            "instructions": ["Boil water", "Add oats"]
        }))
        .unwrap()
    }

    #[test]
    fn nutrition_absent_means_derived() {
        let mut r = request();
        r.validate().unwrap();
        assert!(r.explicit_nutrition().unwrap().is_none());
    }

    #[test]
    fn partial_nutrition_is_rejected() {
        let mut r = request();
        r.calories_per_serving = Some(300);
        assert!(matches!(r.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn zero_servings_is_rejected() {
        let mut r = request();
        r.servings = 0.0;
        assert!(r.validate().is_err());
    }

    #[test]
    fn ingredient_ids_are_unique() {
        let mut r = request();
        r.ingredients.push(RecipeIngredientRequest {
            ingredient_id: 1,
            amount: 5.0,
            note: None,
        });
        assert_eq!(r.ingredient_ids(), vec![1]);
    }
}
