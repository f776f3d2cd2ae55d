//! Input validation
//!
//! Checks raw tool inputs before they reach the calculators, which
//! assume positive finite values.

use thiserror::Error;
use tracing::warn;

use crate::models::{Biometrics, Gender};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },

    #[error("Invalid gender: '{0}'. Valid values: male, female")]
    UnknownGender(String),

    #[error("Invalid food category: '{0}'. Valid values: carb, protein, vegetable, fruit, fat")]
    UnknownCategory(String),
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(value)
}

fn require_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

/// Validate raw biometric inputs
pub fn validate_biometrics(
    age: i64,
    height_cm: f64,
    weight_kg: f64,
    gender: &str,
    is_athlete: bool,
) -> Result<Biometrics, ValidationError> {
    let result = parse_biometrics(age, height_cm, weight_kg, gender, is_athlete);
    if let Err(ref e) = result {
        warn!(error = %e, "Rejected biometrics");
    }
    result
}

fn parse_biometrics(
    age: i64,
    height_cm: f64,
    weight_kg: f64,
    gender: &str,
    is_athlete: bool,
) -> Result<Biometrics, ValidationError> {
    if age <= 0 {
        return Err(ValidationError::NonPositive {
            field: "age",
            value: age as f64,
        });
    }
    let age_years = u32::try_from(age).map_err(|_| ValidationError::OutOfRange { field: "age" })?;
    let height_cm = require_positive("height_cm", height_cm)?;
    let weight_kg = require_positive("weight_kg", weight_kg)?;
    let gender = Gender::from_str(gender)
        .ok_or_else(|| ValidationError::UnknownGender(gender.to_string()))?;

    Ok(Biometrics {
        age_years,
        height_cm,
        weight_kg,
        gender,
        is_athlete,
    })
}

/// Validate daily plan targets; zero is allowed and yields an empty plan
pub fn validate_targets(
    target_calories: f64,
    target_protein_grams: f64,
) -> Result<(f64, f64), ValidationError> {
    let result = require_non_negative("target_calories", target_calories).and_then(|calories| {
        require_non_negative("target_protein_grams", target_protein_grams)
            .map(|protein| (calories, protein))
    });

    if let Err(ref e) = result {
        warn!(error = %e, "Rejected plan targets");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_biometrics() {
        let b = validate_biometrics(30, 170.0, 70.0, "Female", true).unwrap();
        assert_eq!(b.age_years, 30);
        assert_eq!(b.gender, Gender::Female);
        assert!(b.is_athlete);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert_eq!(
            validate_biometrics(0, 170.0, 70.0, "male", false),
            Err(ValidationError::NonPositive { field: "age", value: 0.0 })
        );
        assert_eq!(
            validate_biometrics(30, -1.0, 70.0, "male", false),
            Err(ValidationError::NonPositive { field: "height_cm", value: -1.0 })
        );
        assert_eq!(
            validate_biometrics(30, 170.0, 0.0, "male", false),
            Err(ValidationError::NonPositive { field: "weight_kg", value: 0.0 })
        );
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        assert_eq!(
            validate_biometrics(30, f64::NAN, 70.0, "male", false),
            Err(ValidationError::NotANumber { field: "height_cm" })
        );
        assert_eq!(
            validate_biometrics(30, 170.0, f64::INFINITY, "male", false),
            Err(ValidationError::NotANumber { field: "weight_kg" })
        );
    }

    #[test]
    fn test_rejects_huge_age_and_unknown_gender() {
        assert_eq!(
            validate_biometrics(i64::MAX, 170.0, 70.0, "male", false),
            Err(ValidationError::OutOfRange { field: "age" })
        );
        assert_eq!(
            validate_biometrics(30, 170.0, 70.0, "robot", false),
            Err(ValidationError::UnknownGender("robot".to_string()))
        );
    }

    #[test]
    fn test_validate_targets() {
        assert_eq!(validate_targets(0.0, 0.0), Ok((0.0, 0.0)));
        assert_eq!(validate_targets(2000.0, 80.0), Ok((2000.0, 80.0)));
        assert_eq!(
            validate_targets(-1.0, 80.0),
            Err(ValidationError::Negative { field: "target_calories", value: -1.0 })
        );
        assert_eq!(
            validate_targets(2000.0, f64::NAN),
            Err(ValidationError::NotANumber { field: "target_protein_grams" })
        );
    }

    #[test]
    fn test_error_messages() {
        let e = ValidationError::NonPositive { field: "age", value: -3.0 };
        assert_eq!(e.to_string(), "age must be greater than zero (got -3)");
    }
}
