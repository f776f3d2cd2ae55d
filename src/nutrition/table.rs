//! Nutrition table
//!
//! Read-only reference foods. Nutrient values are per `serving_size`
//! units of `serving_unit`.

use crate::models::{FoodCategory, FoodEntry};

static STANDARD_FOODS: [FoodEntry; 11] = [
    FoodEntry {
        name: "Rice (cooked)",
        serving_unit: "cup",
        serving_size: 1.0,
        calories_per_unit: 205.0,
        protein_per_unit_grams: 4.3,
        category: FoodCategory::Carb,
    },
    FoodEntry {
        name: "Roti (whole wheat)",
        serving_unit: "piece (medium)",
        serving_size: 1.0,
        calories_per_unit: 70.0,
        protein_per_unit_grams: 2.5,
        category: FoodCategory::Carb,
    },
    FoodEntry {
        name: "Egg (boiled)",
        serving_unit: "piece (large)",
        serving_size: 1.0,
        calories_per_unit: 78.0,
        protein_per_unit_grams: 6.0,
        category: FoodCategory::Protein,
    },
    FoodEntry {
        name: "Milk (skim)",
        serving_unit: "cup (240 ml)",
        serving_size: 1.0,
        calories_per_unit: 85.0,
        protein_per_unit_grams: 8.0,
        category: FoodCategory::Protein,
    },
    FoodEntry {
        name: "Chicken breast (cooked)",
        serving_unit: "g",
        serving_size: 100.0,
        calories_per_unit: 165.0,
        protein_per_unit_grams: 31.0,
        category: FoodCategory::Protein,
    },
    FoodEntry {
        name: "Fish (rohu, cooked)",
        serving_unit: "g",
        serving_size: 100.0,
        calories_per_unit: 140.0,
        protein_per_unit_grams: 22.0,
        category: FoodCategory::Protein,
    },
    FoodEntry {
        name: "Lentils (masoor, cooked)",
        serving_unit: "cup",
        serving_size: 1.0,
        calories_per_unit: 230.0,
        protein_per_unit_grams: 18.0,
        category: FoodCategory::Protein,
    },
    FoodEntry {
        name: "Mixed vegetables (cooked)",
        serving_unit: "cup",
        serving_size: 1.0,
        calories_per_unit: 70.0,
        protein_per_unit_grams: 3.0,
        category: FoodCategory::Vegetable,
    },
    FoodEntry {
        name: "Banana",
        serving_unit: "piece (medium)",
        serving_size: 1.0,
        calories_per_unit: 105.0,
        protein_per_unit_grams: 1.3,
        category: FoodCategory::Fruit,
    },
    FoodEntry {
        name: "Apple",
        serving_unit: "piece (medium)",
        serving_size: 1.0,
        calories_per_unit: 95.0,
        protein_per_unit_grams: 0.5,
        category: FoodCategory::Fruit,
    },
    FoodEntry {
        name: "Almonds",
        serving_unit: "g",
        serving_size: 25.0,
        calories_per_unit: 150.0,
        protein_per_unit_grams: 5.0,
        category: FoodCategory::Fat,
    },
];

/// Handle to a static table of reference foods
#[derive(Debug, Clone, Copy)]
pub struct NutritionTable {
    entries: &'static [FoodEntry],
}

impl Default for NutritionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl NutritionTable {
    /// The built-in reference foods
    pub fn standard() -> Self {
        Self { entries: &STANDARD_FOODS }
    }

    /// Wrap another static table
    pub const fn from_static(entries: &'static [FoodEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [FoodEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_category(&self, category: FoodCategory) -> Vec<&'static FoodEntry> {
        self.entries
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&'static FoodEntry> {
        self.entries
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Whether `food` is one of this table's rows (by address)
    pub fn contains(&self, food: &FoodEntry) -> bool {
        self.entries.iter().any(|f| std::ptr::eq(f, food))
    }

    /// Protein foods that carry both calories and protein
    pub fn protein_sources(&self) -> Vec<&'static FoodEntry> {
        self.entries
            .iter()
            .filter(|f| {
                f.category == FoodCategory::Protein
                    && f.calories_per_unit > 0.0
                    && f.protein_per_unit_grams > 0.0
            })
            .collect()
    }

    /// Carbs, fruits, and vegetables that carry calories
    pub fn filler_sources(&self) -> Vec<&'static FoodEntry> {
        self.entries
            .iter()
            .filter(|f| f.category.is_filler() && f.calories_per_unit > 0.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_values_are_sane() {
        let table = NutritionTable::standard();
        assert_eq!(table.len(), 11);
        for food in table.entries() {
            assert!(food.serving_size > 0.0, "{}", food.name);
            assert!(food.calories_per_unit >= 0.0, "{}", food.name);
            assert!(food.protein_per_unit_grams >= 0.0, "{}", food.name);
        }
    }

    #[test]
    fn test_protein_sources() {
        let table = NutritionTable::standard();
        let names: Vec<&str> = table.protein_sources().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "Egg (boiled)",
                "Milk (skim)",
                "Chicken breast (cooked)",
                "Fish (rohu, cooked)",
                "Lentils (masoor, cooked)",
            ]
        );
    }

    #[test]
    fn test_filler_sources_exclude_fat_and_protein() {
        let table = NutritionTable::standard();
        let fillers = table.filler_sources();
        assert_eq!(fillers.len(), 5);
        assert!(fillers.iter().all(|f| f.category.is_filler()));
        assert!(fillers.iter().all(|f| f.name != "Almonds"));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let table = NutritionTable::standard();
        let banana = table.find("banana").map(|f| f.calories_per_unit);
        assert_eq!(banana, Some(105.0));
        assert!(table.find("pizza").is_none());
    }

    #[test]
    fn test_contains_by_address() {
        let table = NutritionTable::standard();
        let apple = table.find("Apple").unwrap();
        assert!(table.contains(apple));

        let copy = apple.clone();
        assert!(!table.contains(&copy));
    }

    #[test]
    fn test_zero_calorie_rows_are_not_drawable() {
        static ODD: [FoodEntry; 2] = [
            FoodEntry {
                name: "Water",
                serving_unit: "cup",
                serving_size: 1.0,
                calories_per_unit: 0.0,
                protein_per_unit_grams: 0.0,
                category: FoodCategory::Vegetable,
            },
            FoodEntry {
                name: "Gelatin",
                serving_unit: "g",
                serving_size: 10.0,
                calories_per_unit: 35.0,
                protein_per_unit_grams: 0.0,
                category: FoodCategory::Protein,
            },
        ];
        let table = NutritionTable::from_static(&ODD);
        assert!(table.filler_sources().is_empty());
        assert!(table.protein_sources().is_empty());
        assert_eq!(table.by_category(FoodCategory::Protein).len(), 1);
    }
}
