//! Shared nutrition data structure
//!
//! Used across food entries, portions, meals, and plans.

use serde::{Deserialize, Serialize};

/// Calories and protein carried by a food amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
}

impl Nutrition {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
        }
    }

    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::AddAssign for Nutrition {
    fn add_assign(&mut self, other: Nutrition) {
        *self = Nutrition::add(self, &other);
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let n = Nutrition { calories: 165.0, protein: 31.0 };
        let half = n.scale(0.5);
        assert_eq!(half.calories, 82.5);
        assert_eq!(half.protein, 15.5);
    }

    #[test]
    fn test_sum() {
        let items = vec![
            Nutrition { calories: 78.0, protein: 6.0 },
            Nutrition { calories: 205.0, protein: 4.3 },
        ];
        let total: Nutrition = items.into_iter().sum();
        assert_eq!(total.calories, 283.0);
        assert!((total.protein - 10.3).abs() < 1e-9);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let total: Nutrition = Vec::<Nutrition>::new().into_iter().sum();
        assert_eq!(total, Nutrition::zero());
    }
}
