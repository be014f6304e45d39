//! Tunable constants
//!
//! Presentation-facing numbers with no clinical derivation: the calorie
//! estimate rate and the weekly session goals. Kept here as data so callers
//! can adjust them without touching the store or aggregation logic.

use serde::{Deserialize, Serialize};

use crate::models::ExerciseType;

/// Flat calorie-burn estimate applied to total workout duration
pub const CALORIES_BURNED_PER_MINUTE: f64 = 5.0;

/// Weekly session targets per workout category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGoals {
    pub strength: u32,
    pub cardio: u32,
    pub walking: u32,
    pub flexibility: u32,
}

impl WeeklyGoals {
    pub fn target_for(&self, exercise_type: ExerciseType) -> u32 {
        match exercise_type {
            ExerciseType::Strength => self.strength,
            ExerciseType::Cardio => self.cardio,
            ExerciseType::Walking => self.walking,
            ExerciseType::Flexibility => self.flexibility,
        }
    }
}

impl Default for WeeklyGoals {
    fn default() -> Self {
        Self {
            strength: 3,
            cardio: 3,
            walking: 5,
            flexibility: 2,
        }
    }
}
