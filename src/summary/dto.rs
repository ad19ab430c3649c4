use serde::Serialize;
use time::Date;

use crate::eaten::SourceKind;

/// One eaten meal as it appears in a daily summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealEntry {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub name: String,
    pub servings: f64,
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MealBuckets {
    pub breakfast: Vec<MealEntry>,
    pub lunch: Vec<MealEntry>,
    pub dinner: Vec<MealEntry>,
    pub snack: Vec<MealEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MacrosSummary {
    pub date: Date,
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meals: MealBuckets,
}

impl MacrosSummary {
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            calories: 0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            meals: MealBuckets::default(),
        }
    }
}

/// Planned nutrition for one day.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlannedDay {
    pub date: Date,
    pub meals: usize,
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}
