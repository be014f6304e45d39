//! Data models
//!
//! Rust structs representing logged health records.

mod diet_entry;
mod exercise_entry;
mod nutrition;

pub use diet_entry::{DietEntry, DietEntryCreate, FoodItem, MealType};
pub use exercise_entry::{Exercise, ExerciseEntry, ExerciseEntryCreate, ExerciseType};
pub use nutrition::NutritionTotals;

use thiserror::Error;

/// Entry validation error types
///
/// Raised when constructing an entry from user input, before anything
/// reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("a meal entry must contain at least one food item")]
    EmptyMeal,

    #[error("food item '{name}' has a negative {field} value")]
    NegativeMacro { name: String, field: &'static str },

    #[error("workout duration must be greater than zero, got {0}")]
    NonPositiveDuration(f64),
}
