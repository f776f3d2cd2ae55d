//! Diet plan model
//!
//! Portions, meals, and the full-day plan produced by the planner.

use serde::{Deserialize, Serialize};

use super::{FoodEntry, Nutrition};

/// Meal slot of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealLabel {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealLabel {
    /// Plan order
    pub const ALL: [MealLabel; 4] = [
        MealLabel::Breakfast,
        MealLabel::Lunch,
        MealLabel::Dinner,
        MealLabel::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealLabel::Breakfast => "breakfast",
            MealLabel::Lunch => "lunch",
            MealLabel::Dinner => "dinner",
            MealLabel::Snack => "snack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealLabel::Breakfast => "Breakfast",
            MealLabel::Lunch => "Lunch",
            MealLabel::Dinner => "Dinner",
            MealLabel::Snack => "Snacks",
        }
    }
}

/// An amount of one reference food placed into a meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodPortion {
    pub food: &'static FoodEntry,
    pub quantity: f64,
    /// Display unit for `quantity` ("g", "cup", "piece")
    pub quantity_unit: String,
    pub calories: f64,
    pub protein_grams: f64,
}

impl FoodPortion {
    /// Portion of `quantity` serving units, nutrients scaled linearly
    pub fn new(food: &'static FoodEntry, quantity: f64, quantity_unit: impl Into<String>) -> Self {
        let nutrition = food.nutrition_for(quantity);
        Self {
            food,
            quantity,
            quantity_unit: quantity_unit.into(),
            calories: nutrition.calories,
            protein_grams: nutrition.protein,
        }
    }

    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein_grams,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub label: MealLabel,
    pub items: Vec<FoodPortion>,
}

impl Meal {
    pub fn new(label: MealLabel) -> Self {
        Self { label, items: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Realized calories and protein of this meal
    pub fn nutrition(&self) -> Nutrition {
        self.items.iter().map(FoodPortion::nutrition).sum()
    }
}

/// A full day of meals in breakfast, lunch, dinner, snack order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlan {
    pub meals: Vec<Meal>,
    pub total_calories: f64,
    pub total_protein_grams: f64,
}

impl DietPlan {
    /// Build a plan whose totals are the realized sums of every portion
    pub fn from_meals(meals: Vec<Meal>) -> Self {
        let totals: Nutrition = meals
            .iter()
            .flat_map(|meal| meal.items.iter())
            .map(FoodPortion::nutrition)
            .sum();

        Self {
            meals,
            total_calories: totals.calories,
            total_protein_grams: totals.protein,
        }
    }

    pub fn meal(&self, label: MealLabel) -> Option<&Meal> {
        self.meals.iter().find(|m| m.label == label)
    }

    pub fn portions(&self) -> impl Iterator<Item = &FoodPortion> {
        self.meals.iter().flat_map(|meal| meal.items.iter())
    }
}
