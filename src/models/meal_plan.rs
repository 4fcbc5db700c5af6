//! Meal plan model
//!
//! A derived, read-only plan built on demand from a profile.

use serde::{Deserialize, Serialize};

use super::{Goal, MealType};

/// Macronutrient split as whole percentages of daily calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub carbs: u8,
    pub protein: u8,
    pub fat: u8,
}

impl MacroSplit {
    pub const fn new(carbs: u8, protein: u8, fat: u8) -> Self {
        Self { carbs, protein, fat }
    }

    pub fn total(&self) -> u32 {
        u32::from(self.carbs) + u32::from(self.protein) + u32::from(self.fat)
    }
}

/// One meal slot within a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub name: String,
    pub meal_type: MealType,
    pub calories: i64,
    pub time: String,
    pub suggestions: Vec<String>,
}

/// Daily meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub goal: Goal,
    pub daily_calories: i64,
    pub macro_split: MacroSplit,
    pub meals: Vec<PlannedMeal>,
    pub message: String,
}

impl MealPlan {
    /// Sum of the per-meal calories; may differ from `daily_calories` by rounding
    pub fn planned_calories(&self) -> i64 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}
