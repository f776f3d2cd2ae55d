//! Meal planning
//!
//! Randomized greedy allocation of a calorie and protein budget across
//! the meals of one day.

pub mod allocator;
pub mod assembler;
pub mod assessment;
pub mod seeding;

pub use allocator::MealAllocator;
pub use assembler::{build_diet_plan, PlanAssembler};
pub use assessment::{assess, Assessment};
pub use seeding::RngSource;
