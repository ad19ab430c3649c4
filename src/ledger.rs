//! Inventory and servings-remaining bookkeeping.
//!
//! Every function here is pure: it inspects a snapshot of store state and
//! either rejects the operation or returns the full set of changes to apply.
//! Callers apply the changes inside one transaction, so a rejected operation
//! never leaves partial mutations behind.

use std::collections::HashMap;

use crate::error::AppError;

/// One ingredient line of a recipe as needed for cooking.
#[derive(Debug, Clone)]
pub struct RecipeLine {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub unit: String,
    /// Amount for the whole recipe (all of its servings).
    pub amount: f64,
}

/// Current on-hand stock for an ingredient.
#[derive(Debug, Clone, Copy)]
pub struct StockLevel {
    pub inventory_id: i64,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StockChange {
    Set { inventory_id: i64, amount: f64 },
    Remove { inventory_id: i64 },
}

impl StockChange {
    pub fn inventory_id(&self) -> i64 {
        match *self {
            StockChange::Set { inventory_id, .. } | StockChange::Remove { inventory_id } => {
                inventory_id
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Requirement {
    ingredient_id: i64,
    name: String,
    unit: String,
    required: f64,
}

/// Sums per-ingredient requirements for `servings` of a recipe that yields
/// `recipe_servings`, keeping first-appearance order.
fn requirements(recipe_servings: f64, servings: f64, lines: &[RecipeLine]) -> Vec<Requirement> {
    let factor = servings / recipe_servings;
    let mut out: Vec<Requirement> = Vec::with_capacity(lines.len());
    let mut index: HashMap<i64, usize> = HashMap::new();

    for line in lines {
        let required = line.amount * factor;
        match index.get(&line.ingredient_id) {
            Some(&i) => out[i].required += required,
            None => {
                index.insert(line.ingredient_id, out.len());
                out.push(Requirement {
                    ingredient_id: line.ingredient_id,
                    name: line.ingredient_name.clone(),
                    unit: line.unit.clone(),
                    required,
                });
            }
        }
    }
    out
}

/// Plans the inventory changes for cooking `servings` of a recipe.
///
/// All ingredients are checked before anything is returned; the first
/// ingredient that is missing or short fails the whole plan.
pub fn plan_cook(
    recipe_servings: f64,
    servings: f64,
    lines: &[RecipeLine],
    stock: &HashMap<i64, StockLevel>,
) -> Result<Vec<StockChange>, AppError> {
    if !(recipe_servings.is_finite() && recipe_servings > 0.0) {
        return Err(AppError::bad_request("recipe has no servings to scale from"));
    }

    let needs = requirements(recipe_servings, servings, lines);
    let mut changes = Vec::with_capacity(needs.len());

    for need in needs {
        let level = match stock.get(&need.ingredient_id) {
            Some(level) if level.amount >= need.required => *level,
            _ => {
                return Err(AppError::InsufficientInventory {
                    ingredient: need.name,
                    required: need.required,
                    unit: need.unit,
                })
            }
        };

        let left = level.amount - need.required;
        changes.push(if left <= 0.0 {
            StockChange::Remove {
                inventory_id: level.inventory_id,
            }
        } else {
            StockChange::Set {
                inventory_id: level.inventory_id,
                amount: left,
            }
        });
    }

    Ok(changes)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServingsChange {
    Remaining(f64),
    Exhausted,
}

/// Takes `servings` from a counter holding `remaining`.
pub fn consume_servings(remaining: f64, servings: f64) -> Result<ServingsChange, AppError> {
    if remaining < servings {
        return Err(AppError::InsufficientServings {
            available: remaining,
        });
    }
    let left = remaining - servings;
    Ok(if left <= 0.0 {
        ServingsChange::Exhausted
    } else {
        ServingsChange::Remaining(left)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: i64, name: &str, amount: f64) -> RecipeLine {
        RecipeLine {
            ingredient_id: id,
            ingredient_name: name.into(),
            unit: "g".into(),
            amount,
        }
    }

    fn stock(entries: &[(i64, i64, f64)]) -> HashMap<i64, StockLevel> {
        entries
            .iter()
            .map(|&(ingredient_id, inventory_id, amount)| {
                (ingredient_id, StockLevel { inventory_id, amount })
            })
            .collect()
    }

    #[test]
    fn oatmeal_one_of_two_servings_uses_half() {
        let lines = vec![line(1, "Oats", 100.0)];
        let plan = plan_cook(2.0, 1.0, &lines, &stock(&[(1, 10, 100.0)])).unwrap();
        assert_eq!(
            plan,
            vec![StockChange::Set {
                inventory_id: 10,
                amount: 50.0
            }]
        );
    }

    #[test]
    fn exact_depletion_removes_entry() {
        for amount in [0.25, 1.0, 3.7, 100.0, 12345.678] {
            let lines = vec![line(1, "Rice", amount)];
            let plan = plan_cook(4.0, 4.0, &lines, &stock(&[(1, 7, amount)])).unwrap();
            assert_eq!(plan, vec![StockChange::Remove { inventory_id: 7 }]);
        }
    }

    #[test]
    fn shortage_fails_whole_plan() {
        let lines = vec![line(1, "Oats", 100.0), line(2, "Milk", 400.0)];
        let levels = stock(&[(1, 10, 500.0), (2, 11, 100.0)]);
        let err = plan_cook(2.0, 2.0, &lines, &levels).unwrap_err();
        match err {
            AppError::InsufficientInventory {
                ingredient,
                required,
                unit,
            } => {
                assert_eq!(ingredient, "Milk");
                assert_eq!(required, 400.0);
                assert_eq!(unit, "g");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_entry_is_insufficient() {
        let lines = vec![line(3, "Eggs", 2.0)];
        let err = plan_cook(1.0, 1.0, &lines, &HashMap::new()).unwrap_err();
        assert!(matches!(err, AppError::InsufficientInventory { .. }));
    }

    #[test]
    fn repeated_ingredient_is_checked_against_sum() {
        let lines = vec![line(1, "Butter", 30.0), line(1, "Butter", 30.0)];
        let err = plan_cook(1.0, 1.0, &lines, &stock(&[(1, 5, 50.0)])).unwrap_err();
        assert!(err.to_string().contains("Need 60"));

        let plan = plan_cook(1.0, 1.0, &lines, &stock(&[(1, 5, 80.0)])).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].inventory_id(), 5);
    }

    #[test]
    fn recipe_without_servings_is_rejected() {
        let err = plan_cook(0.0, 1.0, &[], &HashMap::new()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn consume_exact_exhausts() {
        assert_eq!(consume_servings(2.0, 2.0).unwrap(), ServingsChange::Exhausted);
    }

    #[test]
    fn consume_partial_reduces_by_amount() {
        assert_eq!(
            consume_servings(3.0, 1.0).unwrap(),
            ServingsChange::Remaining(2.0)
        );
    }

    #[test]
    fn consume_too_much_reports_available() {
        let err = consume_servings(1.0, 1.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Insufficient servings remaining. Only 1 available"
        );
    }
}
