//! Diet plan tools
//!
//! Plan generation from explicit targets, and the full assessment that
//! sizes a plan from biometrics.

use rand::Rng;
use serde::Serialize;

use crate::models::{DietPlan, FoodCategory, FoodPortion, Meal, MealLabel};
use crate::planner::{self, PlanAssembler};

use super::format::{format_quantity, round_calories, round_protein};
use super::metrics::MetricsResponse;
use super::validation::{validate_biometrics, validate_targets, ValidationError};

// ============================================================================
// Response Structs
// ============================================================================

/// One food line of a meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortionView {
    pub name: &'static str,
    pub category: FoodCategory,
    /// Quantity with unit, e.g. "100 g" or "1 cup"
    pub quantity: String,
    pub calories: f64,
    pub protein_grams: f64,
}

impl From<&FoodPortion> for PortionView {
    fn from(p: &FoodPortion) -> Self {
        Self {
            name: p.food.name,
            category: p.food.category,
            quantity: format_quantity(p.quantity, &p.quantity_unit),
            calories: round_calories(p.calories),
            protein_grams: round_protein(p.protein_grams),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealView {
    pub meal: MealLabel,
    pub title: &'static str,
    pub items: Vec<PortionView>,
    pub calories: f64,
    pub protein_grams: f64,
}

impl From<&Meal> for MealView {
    fn from(meal: &Meal) -> Self {
        let nutrition = meal.nutrition();
        Self {
            meal: meal.label,
            title: meal.label.display_name(),
            items: meal.items.iter().map(PortionView::from).collect(),
            calories: round_calories(nutrition.calories),
            protein_grams: round_protein(nutrition.protein),
        }
    }
}

/// Response for build_diet_plan
///
/// Meals that received no food are left out of `meals`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlanResponse {
    pub generated_at: String,
    pub target_calories: f64,
    pub target_protein_grams: f64,
    pub meals: Vec<MealView>,
    pub total_calories: f64,
    pub total_protein_grams: f64,
}

impl DietPlanResponse {
    pub fn from_plan(plan: &DietPlan, target_calories: f64, target_protein_grams: f64) -> Self {
        Self {
            generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            target_calories: round_calories(target_calories),
            target_protein_grams: round_protein(target_protein_grams),
            meals: plan
                .meals
                .iter()
                .filter(|m| !m.is_empty())
                .map(MealView::from)
                .collect(),
            total_calories: round_calories(plan.total_calories),
            total_protein_grams: round_protein(plan.total_protein_grams),
        }
    }
}

/// Response for assess
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResponse {
    pub metrics: MetricsResponse,
    pub diet_plan: DietPlanResponse,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Build a one-day plan for explicit calorie and protein targets
pub fn build_diet_plan<R: Rng + ?Sized>(
    assembler: &PlanAssembler,
    target_calories: f64,
    target_protein_grams: f64,
    rng: &mut R,
) -> Result<DietPlanResponse, ValidationError> {
    let (calories, protein) = validate_targets(target_calories, target_protein_grams)?;
    let plan = assembler.build(calories, protein, rng);
    Ok(DietPlanResponse::from_plan(&plan, calories, protein))
}

/// Compute metrics and a plan sized to the TDEE and average protein need
pub fn assess<R: Rng + ?Sized>(
    assembler: &PlanAssembler,
    age: i64,
    height_cm: f64,
    weight_kg: f64,
    gender: &str,
    is_athlete: bool,
    rng: &mut R,
) -> Result<AssessmentResponse, ValidationError> {
    let biometrics = validate_biometrics(age, height_cm, weight_kg, gender, is_athlete)?;
    let assessment = planner::assess(assembler, &biometrics, rng);

    Ok(AssessmentResponse {
        metrics: MetricsResponse::from(&assessment.metrics),
        diet_plan: DietPlanResponse::from_plan(
            &assessment.plan,
            assessment.metrics.tdee_kcal,
            assessment.protein_target_grams,
        ),
    })
}
