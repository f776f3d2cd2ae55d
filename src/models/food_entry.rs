//! Food entry model
//!
//! A row of the static nutrition reference table.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Food group used to decide which allocation phase may draw an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Carb,
    Protein,
    Vegetable,
    Fruit,
    Fat,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 5] = [
        FoodCategory::Carb,
        FoodCategory::Protein,
        FoodCategory::Vegetable,
        FoodCategory::Fruit,
        FoodCategory::Fat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Carb => "carb",
            FoodCategory::Protein => "protein",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Fat => "fat",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "carb" | "carbs" => Some(FoodCategory::Carb),
            "protein" => Some(FoodCategory::Protein),
            "vegetable" | "veg" => Some(FoodCategory::Vegetable),
            "fruit" => Some(FoodCategory::Fruit),
            "fat" => Some(FoodCategory::Fat),
            _ => None,
        }
    }

    /// Whether the filler phase may draw from this category
    pub fn is_filler(&self) -> bool {
        match self {
            FoodCategory::Carb | FoodCategory::Fruit | FoodCategory::Vegetable => true,
            FoodCategory::Protein | FoodCategory::Fat => false,
        }
    }
}

/// A reference food with nutrients for one serving
///
/// `calories_per_unit` and `protein_per_unit_grams` are the amounts
/// contained in `serving_size` units of `serving_unit` (100 g of chicken
/// breast carries 165 kcal).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodEntry {
    pub name: &'static str,
    pub serving_unit: &'static str,
    pub serving_size: f64,
    pub calories_per_unit: f64,
    pub protein_per_unit_grams: f64,
    pub category: FoodCategory,
}

impl FoodEntry {
    /// Nutrients in one serving
    pub fn serving_nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories_per_unit,
            protein: self.protein_per_unit_grams,
        }
    }

    /// Nutrients in `quantity` units of the serving unit
    pub fn nutrition_for(&self, quantity: f64) -> Nutrition {
        self.serving_nutrition().scale(quantity / self.serving_size)
    }
}
