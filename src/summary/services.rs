use time::macros::time;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::eaten::EatenMeal;
use crate::nutrition::{MealType, ScaledMacros};
use crate::planning::repo_types::PlannedNutritionRow;

use super::dto::{MacrosSummary, MealEntry, PlannedDay};

/// First and last instant of `day` in UTC, both inclusive.
pub fn day_bounds(day: Date) -> (OffsetDateTime, OffsetDateTime) {
    let start = PrimitiveDateTime::new(day, time!(00:00:00)).assume_utc();
    let end = PrimitiveDateTime::new(day, time!(23:59:59.999999)).assume_utc();
    (start, end)
}

/// Folds one day's eaten meals, in the order given, into a summary.
///
/// Calories are truncated per meal before summing.
pub fn aggregate(day: Date, meals: &[EatenMeal]) -> MacrosSummary {
    let mut summary = MacrosSummary::empty(day);

    for meal in meals {
        let portion = meal.servings / meal.basis_servings;
        let n = meal.basis().scale(portion);

        summary.calories += n.calories;
        summary.protein += n.protein;
        summary.carbs += n.carbs;
        summary.fat += n.fat;

        let entry = MealEntry {
            kind: meal.source_kind,
            name: meal.source_name.clone(),
            servings: meal.servings,
            calories: n.calories,
            protein: n.protein,
            carbs: n.carbs,
            fat: n.fat,
        };
        let bucket = match meal.meal_type {
            MealType::Breakfast => &mut summary.meals.breakfast,
            MealType::Lunch => &mut summary.meals.lunch,
            MealType::Dinner => &mut summary.meals.dinner,
            MealType::Snack => &mut summary.meals.snack,
        };
        bucket.push(entry);
    }

    summary
}

/// Groups planned meals by date; rows must be ordered by date.
pub fn planned_days(rows: &[PlannedNutritionRow]) -> Vec<PlannedDay> {
    let mut days: Vec<PlannedDay> = Vec::new();

    for row in rows {
        let n = row.per_serving().scale(row.servings);
        match days.last_mut() {
            Some(day) if day.date == row.date => add(day, n),
            _ => {
                let mut day = PlannedDay {
                    date: row.date,
                    meals: 0,
                    calories: 0,
                    protein: 0.0,
                    carbs: 0.0,
                    fat: 0.0,
                };
                add(&mut day, n);
                days.push(day);
            }
        }
    }

    days
}

fn add(day: &mut PlannedDay, n: ScaledMacros) {
    day.meals += 1;
    day.calories += n.calories;
    day.protein += n.protein;
    day.carbs += n.carbs;
    day.fat += n.fat;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eaten::SourceKind;
    use time::macros::{date, datetime};

    fn eaten(
        id: i64,
        meal_type: MealType,
        kind: SourceKind,
        name: &str,
        servings: f64,
        basis: (i32, f64, f64, f64),
        basis_servings: f64,
    ) -> EatenMeal {
        EatenMeal {
            id,
            eaten_at: datetime!(2025-04-02 08:00 UTC),
            meal_type,
            servings,
            source_kind: kind,
            source_id: id,
            source_name: name.into(),
            basis_calories: basis.0,
            basis_protein: basis.1,
            basis_carbs: basis.2,
            basis_fat: basis.3,
            basis_servings,
        }
    }

    #[test]
    fn empty_day_has_zeros_and_empty_buckets() {
        let s = aggregate(date!(2025 - 04 - 02), &[]);
        assert_eq!(s.calories, 0);
        assert_eq!(s.protein, 0.0);
        assert!(s.meals.breakfast.is_empty());
        assert!(s.meals.lunch.is_empty());
        assert!(s.meals.dinner.is_empty());
        assert!(s.meals.snack.is_empty());

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["date"], "2025-04-02");
        assert_eq!(json["meals"]["snack"], serde_json::json!([]));
    }

    #[test]
    fn cooked_meal_goes_to_its_bucket() {
        let meals = [eaten(
            1,
            MealType::Breakfast,
            SourceKind::CookedMeal,
            "Oatmeal",
            1.0,
            (300, 10.0, 50.0, 5.0),
            1.0,
        )];
        let s = aggregate(date!(2025 - 04 - 02), &meals);

        assert_eq!(s.calories, 300);
        assert_eq!(s.protein, 10.0);
        assert_eq!(s.carbs, 50.0);
        assert_eq!(s.fat, 5.0);
        assert_eq!(s.meals.breakfast.len(), 1);
        let entry = &s.meals.breakfast[0];
        assert_eq!(entry.name, "Oatmeal");
        assert_eq!(entry.kind, SourceKind::CookedMeal);

        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["type"], "cooked_meal");
    }

    #[test]
    fn eaten_out_is_prorated_by_total_servings() {
        let meals = [eaten(
            2,
            MealType::Lunch,
            SourceKind::EatenOut,
            "Café - Sandwich",
            1.0,
            (600, 30.0, 70.0, 20.0),
            2.0,
        )];
        let s = aggregate(date!(2025 - 04 - 02), &meals);

        assert_eq!(s.calories, 300);
        assert_eq!(s.protein, 15.0);
        assert_eq!(s.carbs, 35.0);
        assert_eq!(s.fat, 10.0);
        assert_eq!(s.meals.lunch[0].servings, 1.0);
    }

    #[test]
    fn calories_truncate_per_meal_before_summing() {
        // 0.5 * 125 = 62.5 twice: 62 + 62, not 125
        let meals = [
            eaten(1, MealType::Snack, SourceKind::Snack, "Yogurt", 0.5, (125, 0.0, 0.0, 0.0), 1.0),
            eaten(2, MealType::Snack, SourceKind::Snack, "Yogurt", 0.5, (125, 0.0, 0.0, 0.0), 1.0),
        ];
        let s = aggregate(date!(2025 - 04 - 02), &meals);
        assert_eq!(s.calories, 124);
        assert_eq!(s.meals.snack.len(), 2);
    }

    #[test]
    fn buckets_keep_input_order() {
        let meals = [
            eaten(1, MealType::Dinner, SourceKind::Snack, "first", 1.0, (10, 0.0, 0.0, 0.0), 1.0),
            eaten(2, MealType::Breakfast, SourceKind::Snack, "other", 1.0, (10, 0.0, 0.0, 0.0), 1.0),
            eaten(3, MealType::Dinner, SourceKind::Snack, "second", 1.0, (10, 0.0, 0.0, 0.0), 1.0),
        ];
        let s = aggregate(date!(2025 - 04 - 02), &meals);
        let names: Vec<&str> = s.meals.dinner.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(s.calories, 30);
    }

    #[test]
    fn day_bounds_cover_the_whole_utc_day() {
        let (start, end) = day_bounds(date!(2025 - 04 - 02));
        assert_eq!(start, datetime!(2025-04-02 00:00 UTC));
        assert_eq!(end, datetime!(2025-04-02 23:59:59.999999 UTC));
    }

    #[test]
    fn planned_rows_group_by_date() {
        let row = |d: Date, servings: f64| PlannedNutritionRow {
            date: d,
            servings,
            calories_per_serving: 250,
            protein_per_serving: 10.0,
            carbs_per_serving: 20.0,
            fat_per_serving: 5.0,
        };
        let rows = [
            row(date!(2025 - 04 - 01), 1.0),
            row(date!(2025 - 04 - 01), 1.5),
            row(date!(2025 - 04 - 03), 2.0),
        ];
        let days = planned_days(&rows);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date!(2025 - 04 - 01));
        assert_eq!(days[0].meals, 2);
        assert_eq!(days[0].calories, 250 + 375);
        assert_eq!(days[0].protein, 25.0);
        assert_eq!(days[1].calories, 500);
        assert!(planned_days(&[]).is_empty());
    }
}
