use sqlx::{PgConnection, PgExecutor, PgPool};
use time::Date;

use crate::ledger::StockChange;

use super::repo_types::{FoodState, InventoryEntry, StockRow};

const ENTRY_SELECT: &str = r#"
    SELECT inv.id, inv.ingredient_id, i.name AS ingredient_name, i.unit,
           inv.state, inv.amount, inv.purchase_date
      FROM inventory inv
      JOIN ingredients i ON i.id = inv.ingredient_id
"#;

pub async fn list(db: &PgPool, state: Option<FoodState>) -> Result<Vec<InventoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, InventoryEntry>(&format!(
        "{ENTRY_SELECT} WHERE ($1::food_state IS NULL OR inv.state = $1) ORDER BY i.name, inv.state"
    ))
    .bind(state)
    .fetch_all(db)
    .await
}

pub async fn find<'e, E: PgExecutor<'e>>(exec: E, id: i64) -> Result<Option<InventoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, InventoryEntry>(&format!("{ENTRY_SELECT} WHERE inv.id = $1"))
        .bind(id)
        .fetch_optional(exec)
        .await
}

/// Adds `amount` to the (ingredient, state) entry, creating it if absent.
/// The purchase date keeps the most recent of the two.
pub async fn upsert_add(
    conn: &mut PgConnection,
    ingredient_id: i64,
    state: FoodState,
    amount: f64,
    purchase_date: Date,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO inventory (ingredient_id, state, amount, purchase_date)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (ingredient_id, state) DO UPDATE
           SET amount = inventory.amount + EXCLUDED.amount,
               purchase_date = GREATEST(inventory.purchase_date, EXCLUDED.purchase_date)
        RETURNING id
        "#,
    )
    .bind(ingredient_id)
    .bind(state)
    .bind(amount)
    .bind(purchase_date)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

pub async fn set_amount(db: &PgPool, id: i64, amount: f64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("UPDATE inventory SET amount = $2 WHERE id = $1")
        .bind(id)
        .bind(amount)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}

pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM inventory WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}

/// Locks the on-hand (`uncooked`) entries for the given ingredients until the
/// surrounding transaction ends.
pub async fn lock_on_hand(
    conn: &mut PgConnection,
    ingredient_ids: &[i64],
) -> Result<Vec<StockRow>, sqlx::Error> {
    sqlx::query_as::<_, StockRow>(
        r#"
        SELECT id, ingredient_id, amount
          FROM inventory
         WHERE ingredient_id = ANY($1) AND state = 'uncooked'
         ORDER BY id
           FOR UPDATE
        "#,
    )
    .bind(ingredient_ids)
    .fetch_all(conn)
    .await
}

pub async fn apply_changes(conn: &mut PgConnection, changes: &[StockChange]) -> Result<(), sqlx::Error> {
    for change in changes {
        match *change {
            StockChange::Set { inventory_id, amount } => {
                sqlx::query("UPDATE inventory SET amount = $2 WHERE id = $1")
                    .bind(inventory_id)
                    .bind(amount)
                    .execute(&mut *conn)
                    .await?;
            }
            StockChange::Remove { inventory_id } => {
                sqlx::query("DELETE FROM inventory WHERE id = $1")
                    .bind(inventory_id)
                    .execute(&mut *conn)
                    .await?;
            }
        }
    }
    Ok(())
}
