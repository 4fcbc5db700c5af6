//! Nutrition error types

use thiserror::Error;

/// Errors raised while parsing profiles and journal entries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    #[error("Invalid {field}: {reason}")]
    InvalidProfile { field: &'static str, reason: String },

    #[error("Unknown {field} value: '{value}'")]
    UnknownEnumValue { field: &'static str, value: String },

    #[error("No profile registered")]
    NotRegistered,
}

/// Result type for nutrition operations
pub type NutritionResult<T> = Result<T, NutritionError>;

impl NutritionError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        NutritionError::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }

    pub fn unknown(field: &'static str, value: impl Into<String>) -> Self {
        NutritionError::UnknownEnumValue {
            field,
            value: value.into(),
        }
    }
}

/// Require a finite value strictly greater than zero
pub fn require_positive(field: &'static str, value: f64) -> NutritionResult<f64> {
    if !value.is_finite() {
        return Err(NutritionError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(NutritionError::invalid(field, "must be greater than 0"));
    }
    Ok(value)
}

/// Require a finite value that is zero or greater
pub fn require_non_negative(field: &'static str, value: f64) -> NutritionResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(NutritionError::invalid(field, "must be 0 or greater"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("weight", 70.0), Ok(70.0));
        assert!(matches!(
            require_positive("weight", 0.0),
            Err(NutritionError::InvalidProfile { field: "weight", .. })
        ));
        assert!(require_positive("weight", -1.0).is_err());
        assert!(require_positive("weight", f64::NAN).is_err());
        assert!(require_positive("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("fat", 0.0), Ok(0.0));
        assert!(require_non_negative("fat", -0.5).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = NutritionError::unknown("goal", "bulk");
        assert_eq!(err.to_string(), "Unknown goal value: 'bulk'");

        let err = NutritionError::invalid("height", "must be greater than 0");
        assert_eq!(err.to_string(), "Invalid height: must be greater than 0");
    }
}
