//! Exercise entry model
//!
//! Represents one logged workout with its exercises and a cached calorie
//! estimate derived from total duration.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config;
use super::ValidationError;

/// Exercise type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Strength,
    Cardio,
    Walking,
    Flexibility,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Strength => "strength",
            ExerciseType::Cardio => "cardio",
            ExerciseType::Walking => "walking",
            ExerciseType::Flexibility => "flexibility",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strength" => Some(ExerciseType::Strength),
            "cardio" => Some(ExerciseType::Cardio),
            "walking" => Some(ExerciseType::Walking),
            "flexibility" => Some(ExerciseType::Flexibility),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseType::Strength => "Strength",
            ExerciseType::Cardio => "Cardio",
            ExerciseType::Walking => "Walking",
            ExerciseType::Flexibility => "Flexibility",
        }
    }
}

/// One exercise within a workout
///
/// All metric fields are optional; which ones are present depends on the
/// workout type (sets/reps/weight for strength, duration/distance for
/// cardio and walking). Absent fields are omitted from the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// A logged workout, immutable once saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub exercises: Vec<Exercise>,
    /// Total workout duration in minutes
    pub duration: f64,
    pub calories_burned: f64,
}

/// Data for creating an exercise entry
#[derive(Debug, Clone)]
pub struct ExerciseEntryCreate {
    pub exercise_type: ExerciseType,
    pub exercises: Vec<Exercise>,
    pub duration: f64,
}

impl ExerciseEntry {
    /// Create a new exercise entry stamped with the current local time
    pub fn create(data: ExerciseEntryCreate) -> Result<Self, ValidationError> {
        Self::create_at(data, Local::now())
    }

    /// Create a new exercise entry with an explicit reference time
    ///
    /// Calories burned are estimated once here from total duration and the
    /// configured per-minute rate; the value is stored redundantly and never
    /// recomputed.
    pub fn create_at(
        data: ExerciseEntryCreate,
        now: DateTime<Local>,
    ) -> Result<Self, ValidationError> {
        if data.duration <= 0.0 {
            return Err(ValidationError::NonPositiveDuration(data.duration));
        }

        Ok(Self {
            id: now.timestamp_millis().to_string(),
            date: now.to_rfc3339(),
            exercise_type: data.exercise_type,
            exercises: data.exercises,
            duration: data.duration,
            calories_burned: data.duration * config::CALORIES_BURNED_PER_MINUTE,
        })
    }
}
