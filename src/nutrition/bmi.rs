//! Body Mass Index
//!
//! BMI = weight (kg) / height (m)^2, rounded to two decimals.

use serde::{Deserialize, Serialize};

use super::error::{require_positive, NutritionResult};

/// Round half away from zero to `places` decimal places
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Compute BMI from weight in kilograms and height in centimeters.
///
/// Both inputs must be positive; this function does not check.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_places(weight_kg / (height_m * height_m), 2)
}

/// Checked variant of [`compute_bmi`] for unvalidated input
pub fn try_compute_bmi(weight_kg: f64, height_cm: f64) -> NutritionResult<f64> {
    let weight_kg = require_positive("weight", weight_kg)?;
    let height_cm = require_positive("height", height_cm)?;
    Ok(compute_bmi(weight_kg, height_cm))
}

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    Normal,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    /// Lower bound inclusive, upper bound exclusive
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::error::NutritionError;

    #[test]
    fn test_compute_bmi_reference() {
        // 70 / 1.75^2 = 22.857...
        assert_eq!(compute_bmi(70.0, 175.0), 22.86);
    }

    #[test]
    fn test_compute_bmi_other_values() {
        // 50 / 1.6^2 = 19.53125
        assert_eq!(compute_bmi(50.0, 160.0), 19.53);
        // 100 / 2^2 = 25 exactly
        assert_eq!(compute_bmi(100.0, 200.0), 25.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.125 and 2.5 are exact in binary, so these are true ties
        assert_eq!(round_to_places(0.125, 2), 0.13);
        assert_eq!(round_to_places(-0.125, 2), -0.13);
        assert_eq!(round_to_places(2.5, 0), 3.0);
        assert_eq!(round_to_places(-2.5, 0), -3.0);
        assert_eq!(round_to_places(22.857142, 2), 22.86);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::from_bmi(18.5).label(), "Normal weight");
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_value(BmiCategory::Normal).unwrap();
        assert_eq!(json, "Normal weight");
    }

    #[test]
    fn test_try_compute_bmi_rejects_bad_input() {
        assert_eq!(try_compute_bmi(70.0, 175.0), Ok(22.86));
        assert!(matches!(
            try_compute_bmi(70.0, 0.0),
            Err(NutritionError::InvalidProfile { field: "height", .. })
        ));
        assert!(matches!(
            try_compute_bmi(-1.0, 175.0),
            Err(NutritionError::InvalidProfile { field: "weight", .. })
        ));
        assert!(try_compute_bmi(f64::NAN, 175.0).is_err());
    }
}
