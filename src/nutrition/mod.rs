//! Nutrition calculation module
//!
//! BMI, daily calorie targets and meal plan templating. Every function here is
//! pure; validation happens when a [`Profile`](crate::models::Profile) is built.

pub mod bmi;
pub mod calories;
pub mod error;
pub mod meal_plan;

pub use bmi::{compute_bmi, round_to_places, try_compute_bmi, BmiCategory};
pub use calories::{
    activity_multiplier, basal_metabolic_rate, compute_daily_calories, goal_factor,
    total_daily_energy_expenditure,
};
pub use error::{NutritionError, NutritionResult};
pub use meal_plan::{build_meal_plan, generate_meal_plan, macro_split, DEFAULT_MACRO_SPLIT};
