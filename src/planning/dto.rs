use serde::Deserialize;
use time::Date;

use crate::error::{ensure_positive, AppError};
use crate::nutrition::MealType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedSource {
    Recipe(i64),
    Snack(i64),
}

#[derive(Debug, Deserialize)]
pub struct PlannedMealRequest {
    pub date: Date,
    pub meal_type: MealType,
    pub servings: f64,
    #[serde(default)]
    pub recipe_id: Option<i64>,
    #[serde(default)]
    pub snack_id: Option<i64>,
}

impl PlannedMealRequest {
    pub fn source(&self) -> Result<PlannedSource, AppError> {
        match (self.recipe_id, self.snack_id) {
            (Some(id), None) => Ok(PlannedSource::Recipe(id)),
            (None, Some(id)) => Ok(PlannedSource::Snack(id)),
            (None, None) => Err(AppError::bad_request(
                "Either recipe_id or snack_id must be provided",
            )),
            (Some(_), Some(_)) => Err(AppError::bad_request(
                "Only one of recipe_id or snack_id may be provided",
            )),
        }
    }

    /// Checks servings and returns the source.
    pub fn validate(&self) -> Result<PlannedSource, AppError> {
        ensure_positive("servings", self.servings)?;
        self.source()
    }
}

/// Partial update; absent fields keep their value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlannedMealRequest {
    pub date: Option<Date>,
    pub meal_type: Option<MealType>,
    pub servings: Option<f64>,
    pub eaten: Option<bool>,
}

impl UpdatePlannedMealRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(servings) = self.servings {
            ensure_positive("servings", servings)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct DateRange {
    pub start_date: Date,
    pub end_date: Date,
}

impl DateRange {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.end_date < self.start_date {
            return Err(AppError::bad_request("end_date must not be before start_date"));
        }
        Ok(())
    }
}
