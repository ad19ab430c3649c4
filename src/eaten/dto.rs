use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::error::AppError;
use crate::nutrition::MealType;

use super::repo_types::SourceKind;

/// Where an eaten meal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EatenSource {
    CookedMeal(i64),
    Snack(i64),
    EatenOut(i64),
}

impl EatenSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            EatenSource::CookedMeal(_) => SourceKind::CookedMeal,
            EatenSource::Snack(_) => SourceKind::Snack,
            EatenSource::EatenOut(_) => SourceKind::EatenOut,
        }
    }

    pub fn id(&self) -> i64 {
        match *self {
            EatenSource::CookedMeal(id) | EatenSource::Snack(id) | EatenSource::EatenOut(id) => id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EatRequest {
    pub meal_type: MealType,
    pub servings: f64,
    #[serde(default)]
    pub cooked_meal_id: Option<i64>,
    #[serde(default)]
    pub snack_id: Option<i64>,
    #[serde(default)]
    pub eaten_out_id: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub eaten_at: Option<OffsetDateTime>,
}

impl EatRequest {
    /// Exactly one of the three ids must be present.
    pub fn source(&self) -> Result<EatenSource, AppError> {
        match (self.cooked_meal_id, self.snack_id, self.eaten_out_id) {
            (Some(id), None, None) => Ok(EatenSource::CookedMeal(id)),
            (None, Some(id), None) => Ok(EatenSource::Snack(id)),
            (None, None, Some(id)) => Ok(EatenSource::EatenOut(id)),
            (None, None, None) => Err(AppError::bad_request(
                "One of cooked_meal_id, snack_id, or eaten_out_id must be provided",
            )),
            _ => Err(AppError::bad_request(
                "Only one of cooked_meal_id, snack_id, or eaten_out_id may be provided",
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub day: Date,
}
