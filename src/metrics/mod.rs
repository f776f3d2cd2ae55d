//! Health metrics
//!
//! Pure functions from biometrics to BMI, ideal weight, energy
//! expenditure, and protein requirement.

pub mod calculator;

pub use calculator::{
    classify_bmi, compute_bmi, compute_bmr, compute_ideal_weight_kg, compute_metrics,
    compute_protein_range_grams, compute_tdee,
};
