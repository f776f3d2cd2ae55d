//! Data models
//!
//! Value types shared by the calculators, the planner, and the tools.

mod biometrics;
mod food_entry;
mod metrics;
mod nutrition;
mod plan;

pub use biometrics::{Biometrics, Gender};
pub use food_entry::{FoodCategory, FoodEntry};
pub use metrics::{BmiCategory, Metrics, ProteinRange, WeightStatus};
pub use nutrition::Nutrition;
pub use plan::{DietPlan, FoodPortion, Meal, MealLabel};
