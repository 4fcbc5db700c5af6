//! Data models
//!
//! Profiles, derived plans, accounts and the activity journal.

mod account;
mod journal;
mod meal_plan;
mod profile;
mod streak;

pub use account::{
    parse_restrictions, Account, AccountOptions, DietaryRestriction, ProfileUpdate,
    Recalculation, DEFAULT_WATER_GOAL,
};
pub use journal::{
    DailySummary, DayTotal, Journal, MealLog, MealLogCreate, MealType, WaterEntry, WeightEntry,
};
pub use meal_plan::{MacroSplit, MealPlan, PlannedMeal};
pub use profile::{ActivityLevel, Gender, Goal, Profile, ProfileInput};
pub use streak::LoginStreak;
