//! Meal plan generation
//!
//! Picks a macro split for the goal and divides the daily calories over four
//! fixed meal slots. Each slot is rounded on its own; the slots are not
//! renormalized, so their sum can drift from the daily total by a calorie or two.

use crate::models::{Goal, MacroSplit, MealPlan, MealType, PlannedMeal, Profile};

use super::calories::compute_daily_calories;

struct MealTemplate {
    meal_type: MealType,
    fraction: f64,
    time: &'static str,
    suggestions: [&'static str; 3],
}

const MEAL_TEMPLATES: [MealTemplate; 4] = [
    MealTemplate {
        meal_type: MealType::Breakfast,
        fraction: 0.25,
        time: "8:00 AM",
        suggestions: [
            "Oatmeal with berries",
            "Greek yogurt with nuts",
            "Whole grain toast with eggs",
        ],
    },
    MealTemplate {
        meal_type: MealType::Lunch,
        fraction: 0.3,
        time: "1:00 PM",
        suggestions: ["Grilled chicken salad", "Quinoa bowl", "Turkey sandwich"],
    },
    MealTemplate {
        meal_type: MealType::Snack,
        fraction: 0.15,
        time: "4:00 PM",
        suggestions: ["Apple with peanut butter", "Protein shake", "Mixed nuts"],
    },
    MealTemplate {
        meal_type: MealType::Dinner,
        fraction: 0.3,
        time: "7:00 PM",
        suggestions: [
            "Salmon with vegetables",
            "Lean beef stir-fry",
            "Vegetarian pasta",
        ],
    },
];

/// Split used for maintenance and as the default for any goal without its own row
pub const DEFAULT_MACRO_SPLIT: MacroSplit = MacroSplit::new(50, 25, 25);

/// Carbs/protein/fat percentages for a goal
pub fn macro_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::WeightLoss => MacroSplit::new(40, 35, 25),
        Goal::MuscleGain => MacroSplit::new(45, 30, 25),
        Goal::WeightGain => MacroSplit::new(55, 20, 25),
        Goal::Maintenance => DEFAULT_MACRO_SPLIT,
    }
}

/// Template a plan for a known daily calorie total
pub fn build_meal_plan(goal: Goal, daily_calories: i64) -> MealPlan {
    let meals = MEAL_TEMPLATES
        .iter()
        .map(|t| PlannedMeal {
            name: t.meal_type.display_name().to_string(),
            meal_type: t.meal_type,
            calories: (daily_calories as f64 * t.fraction).round() as i64,
            time: t.time.to_string(),
            suggestions: t.suggestions.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    MealPlan {
        goal,
        daily_calories,
        macro_split: macro_split(goal),
        meals,
        message: format!(
            "Personalized plan for {} at {} kcal/day.",
            goal, daily_calories
        ),
    }
}

/// Generate the meal plan for a profile
pub fn generate_meal_plan(profile: &Profile) -> MealPlan {
    build_meal_plan(profile.goal(), compute_daily_calories(profile))
}
