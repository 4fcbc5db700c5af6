//! Daily calorie estimation
//!
//! BMR by Mifflin-St Jeor, scaled by an activity multiplier to TDEE, then
//! adjusted for the profile's goal.

use crate::models::{ActivityLevel, Gender, Goal, Profile};

/// Mifflin-St Jeor constant for the given gender.
///
/// Anything that is not male uses the female constant.
fn gender_constant(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 5.0,
        Gender::Female | Gender::Other => -161.0,
    }
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

pub fn goal_factor(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 0.85,
        Goal::WeightGain => 1.15,
        Goal::Maintenance => 1.0,
        Goal::MuscleGain => 1.1,
    }
}

/// Basal Metabolic Rate in kcal/day
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    10.0 * profile.weight() + 6.25 * profile.height() - 5.0 * f64::from(profile.age())
        + gender_constant(profile.gender())
}

/// Total Daily Energy Expenditure in kcal/day (unrounded)
pub fn total_daily_energy_expenditure(profile: &Profile) -> f64 {
    basal_metabolic_rate(profile) * activity_multiplier(profile.activity_level())
}

/// Goal-adjusted daily calorie target, rounded half away from zero
pub fn compute_daily_calories(profile: &Profile) -> i64 {
    let tdee = total_daily_energy_expenditure(profile);
    (tdee * goal_factor(profile.goal())).round() as i64
}
