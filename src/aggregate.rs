//! Derived views over stored entries
//!
//! Weekly per-category workout counts and daily nutrition sums, computed by
//! scanning the full entry lists on every call. Linear scans are fine at
//! personal-logging volumes. Nothing here is persisted; aggregates inherit
//! the store's fail-open read policy and degrade to all-zero values.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::WeeklyGoals;
use crate::models::{ExerciseType, NutritionTotals};
use crate::storage::StorageProvider;
use crate::store::{local_datetime, HealthStore};

/// Per-category count of workouts logged in the current week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyExerciseProgress {
    pub strength: u32,
    pub cardio: u32,
    pub walking: u32,
    pub flexibility: u32,
}

impl WeeklyExerciseProgress {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Count of sessions in the given category
    pub fn count_for(&self, exercise_type: ExerciseType) -> u32 {
        match exercise_type {
            ExerciseType::Strength => self.strength,
            ExerciseType::Cardio => self.cardio,
            ExerciseType::Walking => self.walking,
            ExerciseType::Flexibility => self.flexibility,
        }
    }

    /// Total sessions across all categories
    pub fn total(&self) -> u32 {
        self.strength + self.cardio + self.walking + self.flexibility
    }

    /// Whether every category meets its weekly target
    pub fn meets(&self, goals: &WeeklyGoals) -> bool {
        self.strength >= goals.strength
            && self.cardio >= goals.cardio
            && self.walking >= goals.walking
            && self.flexibility >= goals.flexibility
    }

    fn record(&mut self, exercise_type: ExerciseType) {
        match exercise_type {
            ExerciseType::Strength => self.strength += 1,
            ExerciseType::Cardio => self.cardio += 1,
            ExerciseType::Walking => self.walking += 1,
            ExerciseType::Flexibility => self.flexibility += 1,
        }
    }
}

/// Half-open week window [Sunday 00:00, next Sunday 00:00) containing `now`
pub fn week_window(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let days_since_sunday = now.date().weekday().num_days_from_sunday() as i64;
    let week_start = (now.date() - Duration::days(days_since_sunday)).and_time(NaiveTime::MIN);
    (week_start, week_start + Duration::days(7))
}

impl<S: StorageProvider> HealthStore<S> {
    /// Per-category workout counts for the current local week
    pub fn weekly_exercise_progress(&self) -> WeeklyExerciseProgress {
        self.weekly_exercise_progress_at(Local::now().naive_local())
    }

    /// Per-category workout counts for the week containing `now`
    pub fn weekly_exercise_progress_at(&self, now: NaiveDateTime) -> WeeklyExerciseProgress {
        let (week_start, week_end) = week_window(now);

        let mut progress = WeeklyExerciseProgress::zero();
        for entry in self.exercise_entries() {
            if let Some(ts) = local_datetime(&entry.date) {
                if ts >= week_start && ts < week_end {
                    progress.record(entry.exercise_type);
                }
            }
        }
        progress
    }

    /// Summed macro totals over today's diet entries
    pub fn todays_nutrition_totals(&self) -> NutritionTotals {
        self.nutrition_totals_on(Local::now().date_naive())
    }

    /// Summed macro totals over the diet entries of an explicit local day
    pub fn nutrition_totals_on(&self, day: NaiveDate) -> NutritionTotals {
        self.diet_entries_on(day)
            .iter()
            .map(|e| e.nutrition_totals())
            .sum()
    }
}
