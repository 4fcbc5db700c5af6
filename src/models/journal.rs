//! Activity journal
//!
//! In-memory log of meals, water and weight. Totals are derived on read.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::profile::normalize_label;
use crate::nutrition::error::{require_non_negative, require_positive, NutritionError, NutritionResult};

/// Meal type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl FromStr for MealType {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(NutritionError::unknown("meal_type", s)),
        }
    }
}

/// A logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
    pub name: String,
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
    pub meal_type: MealType,
    pub logged_at: NaiveDateTime,
}

/// Data for logging a meal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealLogCreate {
    pub name: String,
    pub calories: f64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub meal_type: String,
}

/// A water intake entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub glasses: u32,
    pub logged_at: NaiveDateTime,
}

/// A weight history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight: f64, // kg
}

/// Per-day total for history views
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTotal<T> {
    pub date: NaiveDate,
    pub total: T,
}

/// Totals for one day measured against the account's goals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub meals: Vec<MealLog>,
    pub calories: f64,
    pub calorie_goal: i64,
    pub calories_remaining: f64,
    pub water_glasses: u32,
    pub water_goal: u32,
    pub water_goal_met: bool,
}

/// Meal, water and weight log
#[derive(Debug, Clone, Default, Serialize)]
pub struct Journal {
    meals: Vec<MealLog>,
    water: Vec<WaterEntry>,
    weights: Vec<WeightEntry>,
    current_weight: Option<f64>,
    total_meals_logged: u64,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty journal whose current weight starts at the registered weight
    pub fn with_current_weight(weight: f64) -> Self {
        Self {
            current_weight: Some(weight),
            ..Self::default()
        }
    }

    /// Validate and record a meal
    pub fn log_meal(&mut self, data: MealLogCreate, at: NaiveDateTime) -> NutritionResult<&MealLog> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(NutritionError::invalid("name", "must not be empty"));
        }

        let meal = MealLog {
            name: name.to_string(),
            calories: require_positive("calories", data.calories)?,
            protein: require_non_negative("protein", data.protein.unwrap_or(0.0))?,
            carbs: require_non_negative("carbs", data.carbs.unwrap_or(0.0))?,
            fat: require_non_negative("fat", data.fat.unwrap_or(0.0))?,
            meal_type: data.meal_type.parse()?,
            logged_at: at,
        };

        self.meals.push(meal);
        self.total_meals_logged += 1;

        let index = self.meals.len() - 1;
        Ok(&self.meals[index])
    }

    /// Record glasses of water
    pub fn log_water(&mut self, glasses: u32, at: NaiveDateTime) -> NutritionResult<&WaterEntry> {
        if glasses == 0 {
            return Err(NutritionError::invalid("glasses", "must be greater than 0"));
        }

        self.water.push(WaterEntry { glasses, logged_at: at });

        let index = self.water.len() - 1;
        Ok(&self.water[index])
    }

    /// Record a weight reading; it becomes the current weight
    pub fn log_weight(&mut self, weight: f64, date: NaiveDate) -> NutritionResult<&[WeightEntry]> {
        let weight = require_positive("weight", weight)?;
        self.weights.push(WeightEntry { date, weight });
        self.current_weight = Some(weight);
        Ok(&self.weights)
    }

    pub fn meals_on(&self, date: NaiveDate) -> Vec<&MealLog> {
        self.meals
            .iter()
            .filter(|m| m.logged_at.date() == date)
            .collect()
    }

    pub fn calories_on(&self, date: NaiveDate) -> f64 {
        self.meals_on(date).iter().map(|m| m.calories).sum()
    }

    /// Total glasses logged on a date
    pub fn water_on(&self, date: NaiveDate) -> u32 {
        self.water
            .iter()
            .filter(|w| w.logged_at.date() == date)
            .map(|w| w.glasses)
            .sum()
    }

    pub fn daily_summary(&self, date: NaiveDate, calorie_goal: i64, water_goal: u32) -> DailySummary {
        let meals: Vec<MealLog> = self.meals_on(date).into_iter().cloned().collect();
        let calories: f64 = meals.iter().map(|m| m.calories).sum();
        let water_glasses = self.water_on(date);

        DailySummary {
            date,
            meals,
            calories,
            calorie_goal,
            calories_remaining: calorie_goal as f64 - calories,
            water_glasses,
            water_goal,
            water_goal_met: water_glasses >= water_goal,
        }
    }

    /// Calories per day, oldest first
    pub fn calorie_history(&self) -> Vec<DayTotal<f64>> {
        let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for meal in &self.meals {
            *by_day.entry(meal.logged_at.date()).or_insert(0.0) += meal.calories;
        }
        by_day
            .into_iter()
            .map(|(date, total)| DayTotal { date, total })
            .collect()
    }

    /// Glasses of water per day, oldest first
    pub fn water_history(&self) -> Vec<DayTotal<u32>> {
        let mut by_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for entry in &self.water {
            *by_day.entry(entry.logged_at.date()).or_insert(0) += entry.glasses;
        }
        by_day
            .into_iter()
            .map(|(date, total)| DayTotal { date, total })
            .collect()
    }

    /// Weight entries in the order they were logged
    pub fn weight_history(&self) -> &[WeightEntry] {
        &self.weights
    }

    pub fn current_weight(&self) -> Option<f64> {
        self.current_weight
    }

    pub fn total_meals_logged(&self) -> u64 {
        self.total_meals_logged
    }
}
