//! Nutrition reference data
//!
//! The static food table and serving-unit recognition.

pub mod table;
pub mod units;

pub use table::NutritionTable;
pub use units::{base_unit, is_gram_unit, short_unit_label};
