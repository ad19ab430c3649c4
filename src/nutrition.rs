use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "meal_type", rename_all = "lowercase")]
pub enum MealType {
    #[serde(alias = "BREAKFAST")]
    Breakfast,
    #[serde(alias = "LUNCH")]
    Lunch,
    #[serde(alias = "DINNER")]
    Dinner,
    #[serde(alias = "SNACK")]
    Snack,
}

/// Calories, protein, carbohydrates and fat for some basis quantity
/// (one serving, one unit, or a whole restaurant order).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Macros {
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Macros after scaling: calories are truncated toward zero.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct ScaledMacros {
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub fn scale(&self, factor: f64) -> ScaledMacros {
        ScaledMacros {
            calories: (f64::from(self.calories) * factor) as i64,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}

impl std::ops::AddAssign for ScaledMacros {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_truncates_calories() {
        let m = Macros {
            calories: 125,
            protein: 3.0,
            carbs: 10.0,
            fat: 1.5,
        };
        let s = m.scale(0.5);
        assert_eq!(s.calories, 62);
        assert_eq!(s.protein, 1.5);
        assert_eq!(s.carbs, 5.0);
        assert_eq!(s.fat, 0.75);
    }

    #[test]
    fn meal_type_accepts_upper_case_alias() {
        let t: MealType = serde_json::from_str("\"DINNER\"").unwrap();
        assert_eq!(t, MealType::Dinner);
        assert_eq!(serde_json::to_string(&MealType::Breakfast).unwrap(), "\"breakfast\"");
    }
}
