//! Shared nutrition totals structure
//!
//! Used for per-entry cached totals and daily aggregate sums.

use serde::{Deserialize, Serialize};

/// Macro nutrient totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl NutritionTotals {
    /// Create a new NutritionTotals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another totals value to this one
    pub fn add(&self, other: &NutritionTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for NutritionTotals {
    type Output = NutritionTotals;

    fn add(self, other: NutritionTotals) -> NutritionTotals {
        NutritionTotals::add(&self, &other)
    }
}

impl std::iter::Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionTotals::zero(), |acc, n| acc + n)
    }
}
