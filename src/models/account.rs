//! Account model
//!
//! A profile together with the values derived from it. Registration computes
//! BMI and the daily calorie goal; updates recompute only what the changed
//! fields feed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::profile::{normalize_label, Profile, ProfileInput};
use crate::nutrition::error::{require_positive, NutritionError, NutritionResult};
use crate::nutrition::{compute_bmi, compute_daily_calories};

/// Default water goal in glasses per day
pub const DEFAULT_WATER_GOAL: u32 = 8;

/// Dietary restriction enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    Keto,
    Paleo,
    None,
}

impl DietaryRestriction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
            DietaryRestriction::Keto => "keto",
            DietaryRestriction::Paleo => "paleo",
            DietaryRestriction::None => "none",
        }
    }
}

impl FromStr for DietaryRestriction {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "vegetarian" => Ok(DietaryRestriction::Vegetarian),
            "vegan" => Ok(DietaryRestriction::Vegan),
            "gluten free" => Ok(DietaryRestriction::GlutenFree),
            "dairy free" => Ok(DietaryRestriction::DairyFree),
            "keto" => Ok(DietaryRestriction::Keto),
            "paleo" => Ok(DietaryRestriction::Paleo),
            "none" => Ok(DietaryRestriction::None),
            _ => Err(NutritionError::unknown("dietary_restriction", s)),
        }
    }
}

pub fn parse_restrictions(values: &[String]) -> NutritionResult<Vec<DietaryRestriction>> {
    values.iter().map(|s| s.parse()).collect()
}

/// Optional account settings supplied at registration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountOptions {
    pub target_weight: Option<f64>,
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub water_goal: Option<u32>,
}

/// Partial update; absent fields are left alone
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(flatten)]
    pub profile: ProfileInput,
    pub target_weight: Option<f64>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub daily_calorie_goal: Option<i64>,
    pub water_goal: Option<u32>,
}

/// Which derived values an update recomputed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Recalculation {
    pub bmi: bool,
    pub daily_calorie_goal: bool,
}

/// A registered profile and its derived values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub profile: Profile,
    pub bmi: f64,
    pub daily_calorie_goal: i64,
    pub water_goal: u32,
    pub target_weight: Option<f64>,
    pub dietary_restrictions: Vec<DietaryRestriction>,
}

fn positive_calorie_goal(goal: i64) -> NutritionResult<i64> {
    if goal <= 0 {
        return Err(NutritionError::invalid(
            "daily_calorie_goal",
            "must be greater than 0",
        ));
    }
    Ok(goal)
}

fn positive_water_goal(goal: u32) -> NutritionResult<u32> {
    if goal == 0 {
        return Err(NutritionError::invalid("water_goal", "must be greater than 0"));
    }
    Ok(goal)
}

impl Account {
    /// Create an account, computing BMI and the calorie goal.
    ///
    /// Fails if the profile yields a calorie goal of 0 or less.
    pub fn register(profile: Profile, options: AccountOptions) -> NutritionResult<Self> {
        let target_weight = options
            .target_weight
            .map(|w| require_positive("target_weight", w))
            .transpose()?;
        let water_goal = positive_water_goal(options.water_goal.unwrap_or(DEFAULT_WATER_GOAL))?;
        let daily_calorie_goal = positive_calorie_goal(compute_daily_calories(&profile))?;

        Ok(Self {
            bmi: compute_bmi(profile.weight(), profile.height()),
            daily_calorie_goal,
            profile,
            water_goal,
            target_weight,
            dietary_restrictions: options.dietary_restrictions,
        })
    }

    /// Apply a partial update.
    ///
    /// All fields are validated, and derived values computed, before anything
    /// is written, so a failed update leaves the account unchanged. The calorie
    /// goal must stay above 0 whether it is supplied or recomputed. An explicit
    /// `daily_calorie_goal` is overwritten when a calorie-relevant profile
    /// field changes in the same update.
    pub fn apply_update(&mut self, update: &ProfileUpdate) -> NutritionResult<Recalculation> {
        let profile = self.profile.merged(&update.profile)?;
        let target_weight = update
            .target_weight
            .map(|w| require_positive("target_weight", w))
            .transpose()?;
        let restrictions = update
            .dietary_restrictions
            .as_deref()
            .map(parse_restrictions)
            .transpose()?;
        let explicit_calorie_goal = update
            .daily_calorie_goal
            .map(positive_calorie_goal)
            .transpose()?;
        let water_goal = update.water_goal.map(positive_water_goal).transpose()?;

        let recalculation = Recalculation {
            bmi: update.profile.touches_bmi(),
            daily_calorie_goal: update.profile.touches_calories(),
        };
        let bmi = if recalculation.bmi {
            compute_bmi(profile.weight(), profile.height())
        } else {
            self.bmi
        };
        let daily_calorie_goal = if recalculation.daily_calorie_goal {
            positive_calorie_goal(compute_daily_calories(&profile))?
        } else {
            explicit_calorie_goal.unwrap_or(self.daily_calorie_goal)
        };

        self.profile = profile;
        self.bmi = bmi;
        self.daily_calorie_goal = daily_calorie_goal;
        if let Some(w) = target_weight {
            self.target_weight = Some(w);
        }
        if let Some(r) = restrictions {
            self.dietary_restrictions = r;
        }
        if let Some(g) = water_goal {
            self.water_goal = g;
        }

        Ok(recalculation)
    }
}
