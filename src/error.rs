use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Postgres SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("Insufficient {ingredient} in inventory. Need {required} {unit}")]
    InsufficientInventory {
        ingredient: String,
        required: f64,
        unit: String,
    },

    #[error("Insufficient servings remaining. Only {available} available")]
    InsufficientServings { available: f64 },

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::InsufficientInventory { .. }
            | AppError::InsufficientServings { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return AppError::Conflict("record is still referenced".into());
            }
        }
        AppError::Internal(e.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Internal(e) => {
                error!(error = %e, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, body).into_response()
    }
}

/// Rejects NaN, infinities and values not strictly positive.
pub fn ensure_positive(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::bad_request(format!("{field} must be greater than 0")))
    }
}

pub fn ensure_non_negative(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::bad_request(format!("{field} must not be negative")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(AppError::NotFound("Recipe").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::bad_request("nope").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InsufficientServings { available: 1.0 }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("in use".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn insufficient_inventory_names_ingredient_and_unit() {
        let err = AppError::InsufficientInventory {
            ingredient: "Oats".into(),
            required: 50.0,
            unit: "g".into(),
        };
        assert_eq!(err.to_string(), "Insufficient Oats in inventory. Need 50 g");
    }

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(AppError::NotFound("Cooked meal").to_string(), "Cooked meal not found");
    }

    #[test]
    fn positive_checks_reject_nan_and_zero() {
        assert!(ensure_positive("servings", 1.5).is_ok());
        assert!(ensure_positive("servings", 0.0).is_err());
        assert!(ensure_positive("servings", f64::NAN).is_err());
        assert!(ensure_non_negative("amount", 0.0).is_ok());
        assert!(ensure_non_negative("amount", -0.1).is_err());
        assert!(ensure_non_negative("amount", f64::INFINITY).is_err());
    }
}
