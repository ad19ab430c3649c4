use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::{ensure_non_negative, ensure_positive, AppError};

fn one_serving() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct EatenOutRequest {
    pub restaurant: String,
    pub meal_name: String,
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default = "one_serving")]
    pub servings_total: f64,
    /// Defaults to `servings_total`: nothing has been eaten yet.
    #[serde(default)]
    pub servings_remaining: Option<f64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub recorded_at: Option<OffsetDateTime>,
}

impl EatenOutRequest {
    pub fn validate(&mut self) -> Result<(), AppError> {
        self.restaurant = self.restaurant.trim().to_string();
        self.meal_name = self.meal_name.trim().to_string();
        if self.meal_name.is_empty() {
            return Err(AppError::bad_request("meal_name is required"));
        }
        if self.calories < 0 {
            return Err(AppError::bad_request("calories must not be negative"));
        }
        ensure_non_negative("protein", self.protein)?;
        ensure_non_negative("carbs", self.carbs)?;
        ensure_non_negative("fat", self.fat)?;
        ensure_positive("servings_total", self.servings_total)?;
        let remaining = self.remaining();
        ensure_non_negative("servings_remaining", remaining)?;
        if remaining > self.servings_total {
            return Err(AppError::bad_request(
                "servings_remaining cannot exceed servings_total",
            ));
        }
        Ok(())
    }

    pub fn remaining(&self) -> f64 {
        self.servings_remaining.unwrap_or(self.servings_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> EatenOutRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn defaults_to_one_untouched_serving() {
        let mut r = parse(
            r#"{"restaurant":"Café","meal_name":"Sandwich","calories":600,"protein":30,"carbs":60,"fat":20}"#,
        );
        r.validate().unwrap();
        assert_eq!(r.servings_total, 1.0);
        assert_eq!(r.remaining(), 1.0);
    }

    #[test]
    fn remaining_above_total_is_rejected() {
        let mut r = parse(
            r#"{"restaurant":"Café","meal_name":"Sandwich","calories":600,"protein":30,"carbs":60,"fat":20,
                "servings_total":2,"servings_remaining":3}"#,
        );
        assert!(r.validate().is_err());
    }
}
