//! Metrics tool
//!
//! Validates biometrics and returns rounded health metrics.

use serde::Serialize;

use crate::metrics;
use crate::models::{BmiCategory, Metrics, WeightStatus};

use super::format::{round_calories, round_measure};
use super::validation::{validate_biometrics, ValidationError};

/// Response for compute_metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsResponse {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmi_category_label: &'static str,
    pub ideal_weight_kg: f64,
    /// Current weight minus ideal weight
    pub weight_difference_kg: f64,
    pub weight_status: WeightStatus,
    pub weight_summary: String,
    pub bmr_kcal: f64,
    pub daily_calories_kcal: f64,
    pub protein_min_grams: f64,
    pub protein_max_grams: f64,
}

impl From<&Metrics> for MetricsResponse {
    fn from(m: &Metrics) -> Self {
        let weight_status = m.weight_status();
        Self {
            bmi: round_measure(m.bmi),
            bmi_category: m.bmi_category,
            bmi_category_label: m.bmi_category.display_name(),
            ideal_weight_kg: round_measure(m.ideal_weight_kg),
            weight_difference_kg: round_measure(m.weight_difference_kg),
            weight_status,
            weight_summary: weight_summary(weight_status, m.weight_difference_kg),
            bmr_kcal: round_calories(m.bmr_kcal),
            daily_calories_kcal: round_calories(m.tdee_kcal),
            protein_min_grams: m.protein_range_grams.min.round(),
            protein_max_grams: m.protein_range_grams.max.round(),
        }
    }
}

fn weight_summary(status: WeightStatus, difference_kg: f64) -> String {
    match status {
        WeightStatus::Above => format!(
            "Your weight is {:.2} kg above your ideal weight.",
            difference_kg.abs()
        ),
        WeightStatus::Below => format!(
            "Your weight is {:.2} kg below your ideal weight.",
            difference_kg.abs()
        ),
        WeightStatus::AtIdeal => "Your weight is at your ideal weight.".to_string(),
    }
}

/// Compute health metrics from raw inputs
pub fn compute_metrics(
    age: i64,
    height_cm: f64,
    weight_kg: f64,
    gender: &str,
    is_athlete: bool,
) -> Result<MetricsResponse, ValidationError> {
    let biometrics = validate_biometrics(age, height_cm, weight_kg, gender, is_athlete)?;
    let metrics = metrics::compute_metrics(&biometrics);
    Ok(MetricsResponse::from(&metrics))
}
