use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

/// Which stage of the kitchen an inventory entry sits in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "food_state", rename_all = "lowercase")]
pub enum FoodState {
    /// On the shopping list.
    #[serde(alias = "PLANNED")]
    Planned,
    /// Bought and on hand; cooking draws from here.
    #[default]
    #[serde(alias = "UNCOOKED")]
    Uncooked,
    #[serde(alias = "READY")]
    Ready,
}

/// Inventory entry joined with its ingredient's name and unit.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryEntry {
    pub id: i64,
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub unit: String,
    pub state: FoodState,
    pub amount: f64,
    pub purchase_date: Date,
}

/// Locked stock row used while cooking.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct StockRow {
    pub id: i64,
    pub ingredient_id: i64,
    pub amount: f64,
}
