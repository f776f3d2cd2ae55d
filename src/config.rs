//! Configuration
//!
//! Named constants for the metric formulas and the meal planner, plus
//! environment-driven server settings.

use thiserror::Error;

use crate::models::MealLabel;

// ============================================================================
// Metric Constants
// ============================================================================

/// BMI below this is underweight
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
/// BMI below this (and at least 18.5) is normal
pub const BMI_NORMAL_BELOW: f64 = 24.9;
/// BMI below this (and at least 24.9) is overweight; above is obese
pub const BMI_OVERWEIGHT_BELOW: f64 = 29.9;

/// Heights at or below five feet use a flat ideal weight
pub const FIVE_FEET_CM: f64 = 152.4;
pub const CM_PER_INCH: f64 = 2.54;
pub const FIVE_FEET_INCHES: f64 = 60.0;

pub const IDEAL_WEIGHT_MALE_BASE_KG: f64 = 52.0;
pub const IDEAL_WEIGHT_MALE_KG_PER_INCH: f64 = 1.9;
pub const IDEAL_WEIGHT_FEMALE_BASE_KG: f64 = 49.0;
pub const IDEAL_WEIGHT_FEMALE_KG_PER_INCH: f64 = 1.7;
pub const IDEAL_WEIGHT_SHORT_MALE_KG: f64 = 50.0;
pub const IDEAL_WEIGHT_SHORT_FEMALE_KG: f64 = 45.0;

/// Mifflin-St Jeor sex constants
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

pub const ATHLETE_ACTIVITY_FACTOR: f64 = 1.7;
pub const SEDENTARY_ACTIVITY_FACTOR: f64 = 1.4;

/// Protein requirement in grams per kg of body weight, (min, max)
pub const ATHLETE_PROTEIN_G_PER_KG: (f64, f64) = (1.2, 2.0);
pub const SEDENTARY_PROTEIN_G_PER_KG: (f64, f64) = (0.8, 1.2);

// ============================================================================
// Planner Constants
// ============================================================================

/// Fraction of the daily calorie and protein budget given to each meal
pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.30;
pub const SNACK_SHARE: f64 = 0.10;

/// A candidate portion may push a meal this far past its calorie target
pub const CALORIE_SLACK_KCAL: f64 = 50.0;

/// Random draws per allocation phase, accepted or not
pub const MAX_ATTEMPTS_PER_PHASE: u32 = 5;

/// Quantity drawn for gram-denominated protein foods
pub const GRAM_DRAW_QUANTITY: f64 = 100.0;

/// Tunables for the meal allocator and plan assembler
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub breakfast_share: f64,
    pub lunch_share: f64,
    pub dinner_share: f64,
    pub snack_share: f64,
    pub calorie_slack_kcal: f64,
    pub max_attempts_per_phase: u32,
    pub gram_draw_quantity: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            breakfast_share: BREAKFAST_SHARE,
            lunch_share: LUNCH_SHARE,
            dinner_share: DINNER_SHARE,
            snack_share: SNACK_SHARE,
            calorie_slack_kcal: CALORIE_SLACK_KCAL,
            max_attempts_per_phase: MAX_ATTEMPTS_PER_PHASE,
            gram_draw_quantity: GRAM_DRAW_QUANTITY,
        }
    }
}

impl PlannerConfig {
    /// Share of the daily budget for one meal slot
    pub fn share_for(&self, label: MealLabel) -> f64 {
        match label {
            MealLabel::Breakfast => self.breakfast_share,
            MealLabel::Lunch => self.lunch_share,
            MealLabel::Dinner => self.dinner_share,
            MealLabel::Snack => self.snack_share,
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Environment variable holding an optional base seed for plan generation
pub const SEED_ENV_VAR: &str = "DIETCALC_SEED";

/// Default tracing directive when RUST_LOG doesn't say otherwise
pub const DEFAULT_LOG_DIRECTIVE: &str = "dietcalc=info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("DIETCALC_SEED must be an unsigned integer, got '{0}'")]
    InvalidSeed(String),
}

/// Server settings read at startup
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Base seed; each request gets `seed + request_index`
    pub seed: Option<u64>,
    pub planner: PlannerConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let seed = parse_seed(std::env::var(SEED_ENV_VAR).ok().as_deref())?;
        Ok(Self {
            seed,
            planner: PlannerConfig::default(),
        })
    }
}

fn parse_seed(raw: Option<&str>) -> Result<Option<u64>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidSeed(s.to_string())),
    }
}
