use serde::Deserialize;
use time::Date;

use super::repo_types::FoodState;

#[derive(Debug, Deserialize)]
pub struct AddInventoryRequest {
    pub ingredient_id: i64,
    pub amount: f64,
    #[serde(default)]
    pub state: FoodState,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub purchase_date: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct SetAmountRequest {
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct InventoryFilter {
    pub state: Option<FoodState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_defaults_to_uncooked() {
        let r: AddInventoryRequest =
            serde_json::from_str(r#"{"ingredient_id": 1, "amount": 100.0}"#).unwrap();
        assert_eq!(r.state, FoodState::Uncooked);
        assert!(r.purchase_date.is_none());
    }

    #[test]
    fn purchase_date_parses_iso() {
        let r: AddInventoryRequest = serde_json::from_str(
            r#"{"ingredient_id": 1, "amount": 1.0, "state": "READY", "purchase_date": "2025-04-02"}"#,
        )
        .unwrap();
        assert_eq!(r.state, FoodState::Ready);
        assert_eq!(r.purchase_date, Some(time::macros::date!(2025 - 04 - 02)));
    }
}
