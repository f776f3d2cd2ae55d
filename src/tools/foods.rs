//! Food table tool
//!
//! Read-only listing of the reference foods.

use serde::Serialize;

use crate::models::{FoodCategory, FoodEntry};
use crate::nutrition::NutritionTable;

use super::validation::ValidationError;

/// Summary of a reference food
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodSummary {
    pub name: &'static str,
    pub category: FoodCategory,
    pub serving_size: f64,
    pub serving_unit: &'static str,
    pub calories: f64,
    pub protein_grams: f64,
}

impl From<&FoodEntry> for FoodSummary {
    fn from(f: &FoodEntry) -> Self {
        Self {
            name: f.name,
            category: f.category,
            serving_size: f.serving_size,
            serving_unit: f.serving_unit,
            calories: f.calories_per_unit,
            protein_grams: f.protein_per_unit_grams,
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<FoodSummary>,
    pub total: usize,
}

/// List reference foods, optionally restricted to one category
pub fn list_foods(
    table: &NutritionTable,
    category: Option<&str>,
) -> Result<ListFoodsResponse, ValidationError> {
    let foods: Vec<FoodSummary> = match category {
        Some(raw) => {
            let category = FoodCategory::from_str(raw)
                .ok_or_else(|| ValidationError::UnknownCategory(raw.to_string()))?;
            table
                .by_category(category)
                .into_iter()
                .map(FoodSummary::from)
                .collect()
        }
        None => table.entries().iter().map(FoodSummary::from).collect(),
    };

    Ok(ListFoodsResponse {
        total: foods.len(),
        foods,
    })
}
