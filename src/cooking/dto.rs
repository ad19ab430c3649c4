use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Deserialize)]
pub struct CookRequest {
    pub recipe_id: i64,
    /// Servings to produce; older clients send it as `servings_remaining`.
    #[serde(alias = "servings_remaining")]
    pub servings: f64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub cooked_at: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_field_name() {
        let r: CookRequest =
            serde_json::from_str(r#"{"recipe_id": 3, "servings_remaining": 1.0}"#).unwrap();
        assert_eq!(r.recipe_id, 3);
        assert_eq!(r.servings, 1.0);
        assert!(r.cooked_at.is_none());
    }

    #[test]
    fn parses_explicit_timestamp() {
        let r: CookRequest = serde_json::from_str(
            r#"{"recipe_id": 3, "servings": 2, "cooked_at": "2025-04-02T18:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(r.cooked_at.unwrap().hour(), 18);
    }
}
