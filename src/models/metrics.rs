//! Metrics model
//!
//! Output of the health metric calculators. Recomputed on every request.

use serde::{Deserialize, Serialize};

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        }
    }
}

/// Daily protein requirement in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProteinRange {
    pub min: f64,
    pub max: f64,
}

impl ProteinRange {
    /// Midpoint used as the plan's protein target
    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Where the current weight sits relative to the ideal weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    Above,
    Below,
    AtIdeal,
}

impl WeightStatus {
    pub fn from_difference(difference_kg: f64) -> Self {
        if difference_kg > 0.0 {
            WeightStatus::Above
        } else if difference_kg < 0.0 {
            WeightStatus::Below
        } else {
            WeightStatus::AtIdeal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub ideal_weight_kg: f64,
    /// Current weight minus ideal weight
    pub weight_difference_kg: f64,
    pub bmr_kcal: f64,
    pub tdee_kcal: f64,
    pub protein_range_grams: ProteinRange,
}

impl Metrics {
    pub fn weight_status(&self) -> WeightStatus {
        WeightStatus::from_difference(self.weight_difference_kg)
    }
}
