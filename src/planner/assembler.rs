//! Plan assembler
//!
//! Splits a daily calorie and protein budget into meal shares and asks
//! the allocator to fill each meal in breakfast, lunch, dinner, snack
//! order. Totals are the realized sums of every portion, not the targets.

use rand::Rng;
use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::models::{DietPlan, Meal, MealLabel};
use crate::nutrition::NutritionTable;

use super::MealAllocator;

#[derive(Debug, Clone, Default)]
pub struct PlanAssembler {
    table: NutritionTable,
    config: PlannerConfig,
}

impl PlanAssembler {
    pub fn new(table: NutritionTable, config: PlannerConfig) -> Self {
        Self { table, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        target_calories: f64,
        target_protein: f64,
        rng: &mut R,
    ) -> DietPlan {
        let allocator = MealAllocator::new(self.table, &self.config);

        let meals: Vec<Meal> = MealLabel::ALL
            .iter()
            .map(|&label| {
                let share = self.config.share_for(label);
                let calorie_target = target_calories * share;
                let protein_target = target_protein * share;
                let items = allocator.allocate_meal(calorie_target, protein_target, &mut *rng);

                let meal = Meal { label, items };
                debug!(
                    meal = label.as_str(),
                    calorie_target,
                    protein_target,
                    items = meal.items.len(),
                    calories = meal.nutrition().calories,
                    "Assembled meal"
                );
                meal
            })
            .collect();

        let plan = DietPlan::from_meals(meals);
        info!(
            target_calories,
            target_protein,
            total_calories = plan.total_calories,
            total_protein = plan.total_protein_grams,
            "Generated diet plan"
        );
        plan
    }
}

/// Build a plan from the standard table with a thread-local random source
pub fn build_diet_plan(target_calories: f64, target_protein: f64) -> DietPlan {
    PlanAssembler::default().build(target_calories, target_protein, &mut rand::thread_rng())
}
