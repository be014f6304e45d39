//! Healthlog Library
//!
//! Local-first persistence and aggregation for meal and workout logging.
//! Screens construct immutable entries, append them through [`store::HealthStore`],
//! and read derived views (today's entries, weekly progress) back for display.

pub mod aggregate;
pub mod config;
pub mod models;
pub mod storage;
pub mod store;

pub use aggregate::WeeklyExerciseProgress;
pub use models::{
    DietEntry, DietEntryCreate, Exercise, ExerciseEntry, ExerciseEntryCreate, ExerciseType,
    FoodItem, MealType, NutritionTotals, ValidationError,
};
pub use storage::{MemoryStorage, SqliteStorage, StorageError, StorageProvider};
pub use store::{HealthStore, StoreError};
