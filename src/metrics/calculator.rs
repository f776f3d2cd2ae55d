//! Metric formulas
//!
//! Inputs are assumed validated (positive, finite). Only `compute_bmi`
//! guards against degenerate geometry.

use crate::config::{
    ATHLETE_ACTIVITY_FACTOR, ATHLETE_PROTEIN_G_PER_KG, BMI_NORMAL_BELOW, BMI_OVERWEIGHT_BELOW,
    BMI_UNDERWEIGHT_BELOW, BMR_FEMALE_OFFSET, BMR_MALE_OFFSET, CM_PER_INCH, FIVE_FEET_CM,
    FIVE_FEET_INCHES, IDEAL_WEIGHT_FEMALE_BASE_KG, IDEAL_WEIGHT_FEMALE_KG_PER_INCH,
    IDEAL_WEIGHT_MALE_BASE_KG, IDEAL_WEIGHT_MALE_KG_PER_INCH, IDEAL_WEIGHT_SHORT_FEMALE_KG,
    IDEAL_WEIGHT_SHORT_MALE_KG, SEDENTARY_ACTIVITY_FACTOR, SEDENTARY_PROTEIN_G_PER_KG,
};
use crate::models::{Biometrics, BmiCategory, Gender, Metrics, ProteinRange};
use tracing::debug;

/// Body-mass index; 0 when weight or height is not positive
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Half-open bands at 18.5, 24.9, and 29.9
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Robinson formula, with a flat value at or below five feet
pub fn compute_ideal_weight_kg(height_cm: f64, gender: Gender) -> f64 {
    if height_cm <= FIVE_FEET_CM {
        return match gender {
            Gender::Male => IDEAL_WEIGHT_SHORT_MALE_KG,
            Gender::Female => IDEAL_WEIGHT_SHORT_FEMALE_KG,
        };
    }

    let inches_over_five_feet = height_cm / CM_PER_INCH - FIVE_FEET_INCHES;
    match gender {
        Gender::Male => {
            IDEAL_WEIGHT_MALE_BASE_KG + IDEAL_WEIGHT_MALE_KG_PER_INCH * inches_over_five_feet
        }
        Gender::Female => {
            IDEAL_WEIGHT_FEMALE_BASE_KG + IDEAL_WEIGHT_FEMALE_KG_PER_INCH * inches_over_five_feet
        }
    }
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + offset
}

/// Total daily energy expenditure with a fixed activity factor
pub fn compute_tdee(bmr: f64, is_athlete: bool) -> f64 {
    let factor = if is_athlete {
        ATHLETE_ACTIVITY_FACTOR
    } else {
        SEDENTARY_ACTIVITY_FACTOR
    };
    bmr * factor
}

pub fn compute_protein_range_grams(weight_kg: f64, is_athlete: bool) -> ProteinRange {
    let (min_per_kg, max_per_kg) = if is_athlete {
        ATHLETE_PROTEIN_G_PER_KG
    } else {
        SEDENTARY_PROTEIN_G_PER_KG
    };
    ProteinRange {
        min: weight_kg * min_per_kg,
        max: weight_kg * max_per_kg,
    }
}

/// All metrics for one set of biometrics
pub fn compute_metrics(biometrics: &Biometrics) -> Metrics {
    let bmi = compute_bmi(biometrics.weight_kg, biometrics.height_cm);
    let ideal_weight_kg = compute_ideal_weight_kg(biometrics.height_cm, biometrics.gender);
    let bmr_kcal = compute_bmr(
        biometrics.weight_kg,
        biometrics.height_cm,
        biometrics.age_years,
        biometrics.gender,
    );

    let bmi_category = classify_bmi(bmi);

    debug!(
        gender = biometrics.gender.as_str(),
        is_athlete = biometrics.is_athlete,
        bmi,
        bmi_category = bmi_category.as_str(),
        bmr_kcal,
        "Computed metrics"
    );

    Metrics {
        bmi,
        bmi_category,
        ideal_weight_kg,
        weight_difference_kg: biometrics.weight_kg - ideal_weight_kg,
        bmr_kcal,
        tdee_kcal: compute_tdee(bmr_kcal, biometrics.is_athlete),
        protein_range_grams: compute_protein_range_grams(
            biometrics.weight_kg,
            biometrics.is_athlete,
        ),
    }
}
