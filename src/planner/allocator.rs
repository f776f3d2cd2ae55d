//! Meal allocator
//!
//! Fills one meal slot in two bounded phases. The protein phase draws
//! protein foods until the meal's protein or calorie target is reached;
//! the filler phase then tops up calories with carbs, fruits, and
//! vegetables. Each phase makes at most `max_attempts_per_phase` draws,
//! and a draw is kept only if the meal stays within
//! `calorie_target + calorie_slack_kcal`. Falling short of either target
//! is a normal outcome.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{FoodEntry, FoodPortion, Nutrition};
use crate::nutrition::{is_gram_unit, short_unit_label, NutritionTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Protein,
    Filler,
}

impl Phase {
    fn as_str(&self) -> &'static str {
        match self {
            Phase::Protein => "protein",
            Phase::Filler => "filler",
        }
    }
}

/// Running state of one meal being filled
struct MealBudget {
    calorie_target: f64,
    protein_target: f64,
    calorie_ceiling: f64,
    consumed: Nutrition,
    portions: Vec<FoodPortion>,
}

impl MealBudget {
    fn new(calorie_target: f64, protein_target: f64, slack: f64) -> Self {
        Self {
            calorie_target,
            protein_target,
            calorie_ceiling: calorie_target + slack,
            consumed: Nutrition::zero(),
            portions: Vec::new(),
        }
    }

    fn wants_more(&self, phase: Phase) -> bool {
        let below_calories = self.consumed.calories < self.calorie_target;
        match phase {
            Phase::Protein => below_calories && self.consumed.protein < self.protein_target,
            Phase::Filler => below_calories,
        }
    }

    /// Keep the portion if it fits under the ceiling
    fn try_add(&mut self, portion: FoodPortion) -> bool {
        if self.consumed.calories + portion.calories > self.calorie_ceiling {
            return false;
        }
        self.consumed += portion.nutrition();
        self.portions.push(portion);
        true
    }
}

/// Draws food portions for a single meal
#[derive(Debug, Clone)]
pub struct MealAllocator<'a> {
    table: NutritionTable,
    config: &'a PlannerConfig,
}

impl<'a> MealAllocator<'a> {
    pub fn new(table: NutritionTable, config: &'a PlannerConfig) -> Self {
        Self { table, config }
    }

    /// Portions approximating `calorie_target` kcal and `protein_target` g
    ///
    /// Protein-phase portions come first, followed by filler portions.
    /// Returns an empty list when `calorie_target` is not positive.
    pub fn allocate_meal<R: Rng + ?Sized>(
        &self,
        calorie_target: f64,
        protein_target: f64,
        rng: &mut R,
    ) -> Vec<FoodPortion> {
        let mut budget = MealBudget::new(
            calorie_target,
            protein_target,
            self.config.calorie_slack_kcal,
        );

        self.run_phase(Phase::Protein, &self.table.protein_sources(), &mut budget, rng);
        self.run_phase(Phase::Filler, &self.table.filler_sources(), &mut budget, rng);

        budget.portions
    }

    fn run_phase<R: Rng + ?Sized>(
        &self,
        phase: Phase,
        pool: &[&'static FoodEntry],
        budget: &mut MealBudget,
        rng: &mut R,
    ) {
        let mut attempts = 0;
        while budget.wants_more(phase) && attempts < self.config.max_attempts_per_phase {
            let Some(&food) = pool.choose(rng) else {
                break;
            };

            let portion = self.trial_portion(phase, food);
            let calories = portion.calories;
            let accepted = budget.try_add(portion);
            debug!(
                phase = phase.as_str(),
                food = food.name,
                calories,
                accepted,
                meal_calories = budget.consumed.calories,
                "Drew food for meal"
            );

            attempts += 1;
        }
    }

    /// Protein draws of gram foods use a fixed gram quantity; every other
    /// draw is exactly one serving.
    fn trial_portion(&self, phase: Phase, food: &'static FoodEntry) -> FoodPortion {
        let quantity = match phase {
            Phase::Protein if is_gram_unit(food.serving_unit) => self.config.gram_draw_quantity,
            Phase::Protein | Phase::Filler => food.serving_size,
        };
        FoodPortion::new(food, quantity, short_unit_label(food.serving_unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    static LENTILS_ONLY: [FoodEntry; 1] = [FoodEntry {
        name: "Lentils",
        serving_unit: "cup",
        serving_size: 1.0,
        calories_per_unit: 100.0,
        protein_per_unit_grams: 10.0,
        category: FoodCategory::Protein,
    }];

    static HEAVY_RICE: [FoodEntry; 1] = [FoodEntry {
        name: "Biryani",
        serving_unit: "plate",
        serving_size: 1.0,
        calories_per_unit: 300.0,
        protein_per_unit_grams: 12.0,
        category: FoodCategory::Carb,
    }];

    static GRAM_FOODS: [FoodEntry; 2] = [
        FoodEntry {
            name: "Chicken",
            serving_unit: "g",
            serving_size: 50.0,
            calories_per_unit: 80.0,
            protein_per_unit_grams: 15.0,
            category: FoodCategory::Protein,
        },
        FoodEntry {
            name: "Oats",
            serving_unit: "grams",
            serving_size: 40.0,
            calories_per_unit: 150.0,
            protein_per_unit_grams: 5.0,
            category: FoodCategory::Carb,
        },
    ];

    static FAT_ONLY: [FoodEntry; 1] = [FoodEntry {
        name: "Ghee",
        serving_unit: "tbsp",
        serving_size: 1.0,
        calories_per_unit: 120.0,
        protein_per_unit_grams: 0.0,
        category: FoodCategory::Fat,
    }];

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn total(portions: &[FoodPortion]) -> Nutrition {
        portions.iter().map(FoodPortion::nutrition).sum()
    }

    #[test]
    fn test_attempt_cap_bounds_protein_phase() {
        let config = PlannerConfig::default();
        let allocator = MealAllocator::new(NutritionTable::from_static(&LENTILS_ONLY), &config);

        let portions = allocator.allocate_meal(1000.0, 1000.0, &mut rng(1));
        assert_eq!(portions.len(), 5);
        assert!(portions.iter().all(|p| p.food.name == "Lentils"));
        assert_eq!(total(&portions).calories, 500.0);
    }

    #[test]
    fn test_slack_rejects_oversized_portion() {
        let config = PlannerConfig::default();
        let allocator = MealAllocator::new(NutritionTable::from_static(&HEAVY_RICE), &config);

        // 300 > 200 + 50
        assert!(allocator.allocate_meal(200.0, 0.0, &mut rng(2)).is_empty());

        // 300 <= 260 + 50, then the calorie target is met
        let portions = allocator.allocate_meal(260.0, 0.0, &mut rng(2));
        assert_eq!(portions.len(), 1);
        assert_eq!(portions[0].quantity, 1.0);
        assert_eq!(portions[0].quantity_unit, "plate");
    }

    #[test]
    fn test_custom_slack_is_honored() {
        let config = PlannerConfig {
            calorie_slack_kcal: 100.0,
            ..PlannerConfig::default()
        };
        let allocator = MealAllocator::new(NutritionTable::from_static(&HEAVY_RICE), &config);
        assert_eq!(allocator.allocate_meal(200.0, 0.0, &mut rng(3)).len(), 1);
    }

    #[test]
    fn test_gram_quantities() {
        let config = PlannerConfig::default();
        let allocator = MealAllocator::new(NutritionTable::from_static(&GRAM_FOODS), &config);

        let portions = allocator.allocate_meal(400.0, 20.0, &mut rng(4));
        let chicken = portions.iter().find(|p| p.food.name == "Chicken").unwrap();
        assert_eq!(chicken.quantity, 100.0);
        assert_eq!(chicken.quantity_unit, "g");
        assert_eq!(chicken.calories, 160.0);
        assert_eq!(chicken.protein_grams, 30.0);

        // Filler draws are one serving even for gram units
        let oats = portions.iter().find(|p| p.food.name == "Oats").unwrap();
        assert_eq!(oats.quantity, 40.0);
        assert_eq!(oats.calories, 150.0);
    }

    #[test]
    fn test_non_positive_target_yields_empty_meal() {
        let config = PlannerConfig::default();
        let allocator = MealAllocator::new(NutritionTable::standard(), &config);
        assert!(allocator.allocate_meal(0.0, 30.0, &mut rng(5)).is_empty());
        assert!(allocator.allocate_meal(-100.0, 30.0, &mut rng(5)).is_empty());
    }

    #[test]
    fn test_empty_pools_yield_no_portions() {
        let config = PlannerConfig::default();
        let allocator = MealAllocator::new(NutritionTable::from_static(&FAT_ONLY), &config);
        assert!(allocator.allocate_meal(500.0, 40.0, &mut rng(6)).is_empty());
    }

    #[test]
    fn test_zero_protein_target_skips_protein_phase() {
        let config = PlannerConfig::default();
        let allocator = MealAllocator::new(NutritionTable::standard(), &config);
        for seed in 0..50 {
            let portions = allocator.allocate_meal(600.0, 0.0, &mut rng(seed));
            assert!(portions.iter().all(|p| p.food.category.is_filler()));
        }
    }

    #[test]
    fn test_meal_properties_hold_across_seeds() {
        let config = PlannerConfig::default();
        let table = NutritionTable::standard();
        let allocator = MealAllocator::new(table, &config);

        for seed in 0..500 {
            let target = 150.0 + (seed as f64) * 3.0;
            let portions = allocator.allocate_meal(target, target / 20.0, &mut rng(seed));

            assert!(portions.len() <= 10);
            assert!(total(&portions).calories <= target + config.calorie_slack_kcal);

            // Protein-phase portions precede filler portions
            let first_filler = portions
                .iter()
                .position(|p| p.food.category != FoodCategory::Protein)
                .unwrap_or(portions.len());
            assert!(portions[..first_filler]
                .iter()
                .all(|p| p.food.category == FoodCategory::Protein));
            assert!(portions[first_filler..]
                .iter()
                .all(|p| p.food.category.is_filler()));

            for p in &portions {
                assert!(table.contains(p.food));
                assert!(p.calories >= 0.0 && p.protein_grams >= 0.0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_meal() {
        let config = PlannerConfig::default();
        let allocator = MealAllocator::new(NutritionTable::standard(), &config);
        let a = allocator.allocate_meal(700.0, 30.0, &mut rng(42));
        let b = allocator.allocate_meal(700.0, 30.0, &mut rng(42));
        assert_eq!(a, b);
    }
}
