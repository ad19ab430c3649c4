use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CookedMeal {
    pub id: i64,
    pub recipe_id: i64,
    pub recipe_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub cooked_at: OffsetDateTime,
    pub servings_remaining: f64,
}

#[derive(Debug, FromRow)]
pub(crate) struct CookingLineRow {
    pub ingredient_id: i64,
    pub name: String,
    pub unit: String,
    pub amount: f64,
}
