//! Profile model
//!
//! A validated body profile. The only way to obtain a [`Profile`] is through
//! [`Profile::new`] or by parsing a [`ProfileInput`], so the calculators can
//! treat every field as well-formed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::nutrition::error::{require_positive, NutritionError, NutritionResult};

/// Normalize an enum label: trimmed, lowercase, `_`/`-` read as spaces
pub(crate) fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Gender used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(NutritionError::unknown("gender", s)),
        }
    }
}

/// Activity level for TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "sedentary")]
    Sedentary,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "very active")]
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very active" => Ok(ActivityLevel::VeryActive),
            _ => Err(NutritionError::unknown("activity_level", s)),
        }
    }
}

/// Body-composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "weight loss")]
    WeightLoss,
    #[serde(rename = "weight gain")]
    WeightGain,
    #[default]
    #[serde(rename = "maintenance")]
    Maintenance,
    #[serde(rename = "muscle gain")]
    MuscleGain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight loss",
            Goal::WeightGain => "weight gain",
            Goal::Maintenance => "maintenance",
            Goal::MuscleGain => "muscle gain",
        }
    }
}

impl FromStr for Goal {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "weight loss" => Ok(Goal::WeightLoss),
            "weight gain" => Ok(Goal::WeightGain),
            "maintenance" => Ok(Goal::Maintenance),
            "muscle gain" => Ok(Goal::MuscleGain),
            _ => Err(NutritionError::unknown("goal", s)),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated profile used by the calorie and meal plan calculators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    age: u32,
    gender: Gender,
    weight: f64, // kg
    height: f64, // cm
    activity_level: ActivityLevel,
    goal: Goal,
}

impl Profile {
    pub fn new(
        age: u32,
        gender: Gender,
        weight: f64,
        height: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> NutritionResult<Self> {
        if age == 0 {
            return Err(NutritionError::invalid("age", "must be greater than 0"));
        }
        Ok(Self {
            age,
            gender,
            weight: require_positive("weight", weight)?,
            height: require_positive("height", height)?,
            activity_level,
            goal,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Height in centimeters
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Build a new profile with the fields present in `patch` replaced.
    ///
    /// Every supplied field is validated; `self` is never modified.
    pub fn merged(&self, patch: &ProfileInput) -> NutritionResult<Self> {
        let age = match patch.age {
            Some(age) => parse_age(age)?,
            None => self.age,
        };
        let gender = match patch.gender.as_deref() {
            Some(s) => s.parse()?,
            None => self.gender,
        };
        let activity_level = match patch.activity_level.as_deref() {
            Some(s) => s.parse()?,
            None => self.activity_level,
        };
        let goal = match patch.goal.as_deref() {
            Some(s) => s.parse()?,
            None => self.goal,
        };

        Self::new(
            age,
            gender,
            patch.weight.unwrap_or(self.weight),
            patch.height.unwrap_or(self.height),
            activity_level,
            goal,
        )
    }
}

fn parse_age(age: i64) -> NutritionResult<u32> {
    if age <= 0 {
        return Err(NutritionError::invalid("age", "must be greater than 0"));
    }
    u32::try_from(age).map_err(|_| NutritionError::invalid("age", "is out of range"))
}

/// Raw, unvalidated profile fields as they arrive from a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    #[serde(alias = "activityLevel")]
    pub activity_level: Option<String>,
    /// Defaults to maintenance when absent
    pub goal: Option<String>,
}

impl ProfileInput {
    /// Validate every field and produce a [`Profile`]
    pub fn parse(&self) -> NutritionResult<Profile> {
        let age = parse_age(self.age.ok_or_else(|| required("age"))?)?;
        let gender: Gender = self
            .gender
            .as_deref()
            .ok_or_else(|| required("gender"))?
            .parse()?;
        let weight = self.weight.ok_or_else(|| required("weight"))?;
        let height = self.height.ok_or_else(|| required("height"))?;
        let activity_level: ActivityLevel = self
            .activity_level
            .as_deref()
            .ok_or_else(|| required("activity_level"))?
            .parse()?;
        let goal = match self.goal.as_deref() {
            Some(s) => s.parse()?,
            None => Goal::default(),
        };

        Profile::new(age, gender, weight, height, activity_level, goal)
    }

    /// True if any field that feeds BMI was supplied
    pub fn touches_bmi(&self) -> bool {
        self.weight.is_some() || self.height.is_some()
    }

    /// True if any field that feeds the calorie goal was supplied
    pub fn touches_calories(&self) -> bool {
        self.touches_bmi()
            || self.age.is_some()
            || self.gender.is_some()
            || self.activity_level.is_some()
            || self.goal.is_some()
    }
}

impl TryFrom<ProfileInput> for Profile {
    type Error = NutritionError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        input.parse()
    }
}

fn required(field: &'static str) -> NutritionError {
    NutritionError::invalid(field, "is required")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProfileInput {
        ProfileInput {
            age: Some(30),
            gender: Some("male".to_string()),
            weight: Some(80.0),
            height: Some(180.0),
            activity_level: Some("moderate".to_string()),
            goal: None,
        }
    }

    #[test]
    fn test_parse_valid_profile_defaults_goal() {
        let profile = input().parse().unwrap();
        assert_eq!(profile.age(), 30);
        assert_eq!(profile.gender(), Gender::Male);
        assert_eq!(profile.activity_level(), ActivityLevel::Moderate);
        assert_eq!(profile.goal(), Goal::Maintenance);
    }

    #[test]
    fn test_parse_labels_are_lenient() {
        assert_eq!("Very Active".parse::<ActivityLevel>(), Ok(ActivityLevel::VeryActive));
        assert_eq!("very_active".parse::<ActivityLevel>(), Ok(ActivityLevel::VeryActive));
        assert_eq!(" weight-loss ".parse::<Goal>(), Ok(Goal::WeightLoss));
        assert_eq!("FEMALE".parse::<Gender>(), Ok(Gender::Female));
    }

    #[test]
    fn test_unknown_enum_values() {
        assert_eq!(
            "extreme".parse::<ActivityLevel>(),
            Err(NutritionError::unknown("activity_level", "extreme"))
        );
        assert!(matches!(
            "bulk".parse::<Goal>(),
            Err(NutritionError::UnknownEnumValue { field: "goal", .. })
        ));
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_missing_and_invalid_fields() {
        let mut missing = input();
        missing.height = None;
        assert_eq!(missing.parse(), Err(NutritionError::invalid("height", "is required")));

        let mut zero_height = input();
        zero_height.height = Some(0.0);
        assert!(matches!(
            zero_height.parse(),
            Err(NutritionError::InvalidProfile { field: "height", .. })
        ));

        let mut negative_weight = input();
        negative_weight.weight = Some(-70.0);
        assert!(negative_weight.parse().is_err());

        let mut zero_age = input();
        zero_age.age = Some(0);
        assert!(matches!(
            zero_age.parse(),
            Err(NutritionError::InvalidProfile { field: "age", .. })
        ));

        let mut nan_weight = input();
        nan_weight.weight = Some(f64::NAN);
        assert!(nan_weight.parse().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_activity_level() {
        let json = r#"{"age": 25, "gender": "female", "weight": 60, "height": 165,
                       "activityLevel": "light", "goal": "weight loss"}"#;
        let parsed: ProfileInput = serde_json::from_str(json).unwrap();
        let profile = parsed.parse().unwrap();
        assert_eq!(profile.activity_level(), ActivityLevel::Light);
        assert_eq!(profile.goal(), Goal::WeightLoss);
    }

    #[test]
    fn test_serialize_uses_wire_labels() {
        let json = serde_json::to_value(ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "very active");
        let json = serde_json::to_value(Goal::MuscleGain).unwrap();
        assert_eq!(json, "muscle gain");
    }

    #[test]
    fn test_merged_replaces_only_supplied_fields() {
        let profile = input().parse().unwrap();
        let patch = ProfileInput {
            goal: Some("muscle gain".to_string()),
            ..Default::default()
        };
        let merged = profile.merged(&patch).unwrap();
        assert_eq!(merged.goal(), Goal::MuscleGain);
        assert_eq!(merged.weight(), 80.0);
        assert!(patch.touches_calories());
        assert!(!patch.touches_bmi());

        let bad = ProfileInput {
            weight: Some(0.0),
            ..Default::default()
        };
        assert!(profile.merged(&bad).is_err());
    }
}
