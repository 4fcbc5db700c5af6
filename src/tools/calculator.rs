//! Calculator MCP Tools
//!
//! Stateless tools: BMI, daily calories and meal plans for an explicit profile.

use serde::Serialize;

use crate::models::{MealPlan, Profile, ProfileInput};
use crate::nutrition::{
    self, activity_multiplier, basal_metabolic_rate, goal_factor, total_daily_energy_expenditure,
    try_compute_bmi, BmiCategory,
};

/// Response for calculate_bmi
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Response for calculate_daily_calories
#[derive(Debug, Serialize)]
pub struct DailyCaloriesResponse {
    pub profile: Profile,
    pub bmr: f64,
    pub activity_multiplier: f64,
    pub tdee: f64,
    pub goal_factor: f64,
    pub daily_calories: i64,
}

fn parse_profile(input: &ProfileInput) -> Result<Profile, String> {
    input.parse().map_err(|e| {
        tracing::warn!(error = %e, "Rejected profile");
        format!("Invalid profile: {}", e)
    })
}

/// Calculate BMI and its category
pub fn calculate_bmi(weight: f64, height: f64) -> Result<BmiResponse, String> {
    let bmi = try_compute_bmi(weight, height).map_err(|e| format!("Cannot calculate BMI: {}", e))?;
    Ok(BmiResponse {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

/// Calculate the daily calorie target with its intermediate values
pub fn calculate_daily_calories(input: &ProfileInput) -> Result<DailyCaloriesResponse, String> {
    let profile = parse_profile(input)?;
    let daily_calories = nutrition::compute_daily_calories(&profile);
    tracing::debug!(daily_calories, goal = %profile.goal(), "Calculated daily calories");

    Ok(DailyCaloriesResponse {
        bmr: basal_metabolic_rate(&profile),
        activity_multiplier: activity_multiplier(profile.activity_level()),
        tdee: total_daily_energy_expenditure(&profile),
        goal_factor: goal_factor(profile.goal()),
        daily_calories,
        profile,
    })
}

/// Generate a meal plan for an explicit profile
pub fn generate_meal_plan(input: &ProfileInput) -> Result<MealPlan, String> {
    let profile = parse_profile(input)?;
    Ok(nutrition::generate_meal_plan(&profile))
}
