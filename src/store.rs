//! Health record store
//!
//! Append-only persistence of diet and exercise entries. Each kind lives
//! under its own key as one JSON-array blob. Reads fail open (a missing or
//! unreadable blob yields an empty list, logged but never propagated);
//! writes fail closed so callers can tell the user a save did not happen.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{DietEntry, ExerciseEntry};
use crate::storage::{StorageError, StorageProvider};

/// Key holding the diet entry list
pub const DIET_ENTRIES_KEY: &str = "@diet_entries";

/// Key holding the exercise entry list
pub const EXERCISE_ENTRIES_KEY: &str = "@exercise_entries";

/// Store error types (write path only; reads fail open)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage write failed: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to encode entry list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for store write operations
pub type StoreResult<T> = Result<T, StoreError>;

/// The record store, generic over its persistence provider
pub struct HealthStore<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> HealthStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All diet entries in append order; empty on any read failure
    pub fn diet_entries(&self) -> Vec<DietEntry> {
        self.read_list(DIET_ENTRIES_KEY)
    }

    /// All exercise entries in append order; empty on any read failure
    pub fn exercise_entries(&self) -> Vec<ExerciseEntry> {
        self.read_list(EXERCISE_ENTRIES_KEY)
    }

    /// Append a diet entry and persist the full list
    pub fn add_diet_entry(&self, entry: DietEntry) -> StoreResult<()> {
        let mut entries = self.diet_entries();
        entries.push(entry);
        self.write_list(DIET_ENTRIES_KEY, &entries)
    }

    /// Append an exercise entry and persist the full list
    pub fn add_exercise_entry(&self, entry: ExerciseEntry) -> StoreResult<()> {
        let mut entries = self.exercise_entries();
        entries.push(entry);
        self.write_list(EXERCISE_ENTRIES_KEY, &entries)
    }

    /// Diet entries whose date falls on today's local calendar day
    pub fn todays_diet_entries(&self) -> Vec<DietEntry> {
        self.diet_entries_on(Local::now().date_naive())
    }

    /// Diet entries for an explicit local calendar day
    pub fn diet_entries_on(&self, day: NaiveDate) -> Vec<DietEntry> {
        self.diet_entries()
            .into_iter()
            .filter(|e| local_day(&e.date) == Some(day))
            .collect()
    }

    /// Exercise entries whose date falls on today's local calendar day
    pub fn todays_exercise_entries(&self) -> Vec<ExerciseEntry> {
        self.exercise_entries_on(Local::now().date_naive())
    }

    /// Exercise entries for an explicit local calendar day
    pub fn exercise_entries_on(&self, day: NaiveDate) -> Vec<ExerciseEntry> {
        self.exercise_entries()
            .into_iter()
            .filter(|e| local_day(&e.date) == Some(day))
            .collect()
    }

    /// Remove both entry lists in one provider call
    pub fn clear_health_data(&self) -> StoreResult<()> {
        self.storage
            .multi_remove(&[DIET_ENTRIES_KEY, EXERCISE_ENTRIES_KEY])?;
        debug!("cleared all health data");
        Ok(())
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.storage.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(key, error = %e, "stored entry list is unreadable, returning empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "storage read failed, returning empty");
                Vec::new()
            }
        }
    }

    fn write_list<T: Serialize>(&self, key: &str, entries: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.storage.set(key, &raw)?;
        debug!(key, count = entries.len(), "persisted entry list");
        Ok(())
    }
}

/// Local calendar day of a stored RFC 3339 date; None if unparseable
pub(crate) fn local_day(date: &str) -> Option<NaiveDate> {
    local_datetime(date).map(|dt| dt.date())
}

/// Local wall-clock time of a stored RFC 3339 date; None if unparseable
pub(crate) fn local_datetime(date: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::models::{
        DietEntryCreate, ExerciseEntryCreate, ExerciseType, FoodItem, MealType,
    };
    use crate::storage::{MemoryStorage, StorageResult};

    /// Provider that fails every call, for exercising the error paths
    struct FailingStorage;

    impl StorageProvider for FailingStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Backend("device storage unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Backend("device storage unavailable".into()))
        }

        fn multi_remove(&self, _keys: &[&str]) -> StorageResult<()> {
            Err(StorageError::Backend("device storage unavailable".into()))
        }
    }

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn meal_at(now: DateTime<Local>, calories: f64) -> DietEntry {
        DietEntry::create_at(
            DietEntryCreate {
                meal_type: MealType::Lunch,
                foods: vec![FoodItem {
                    name: "rice bowl".to_string(),
                    calories,
                    protein: 20.0,
                    carbs: 60.0,
                    fat: 10.0,
                }],
            },
            now,
        )
        .unwrap()
    }

    fn workout_at(now: DateTime<Local>, exercise_type: ExerciseType) -> ExerciseEntry {
        ExerciseEntry::create_at(
            ExerciseEntryCreate {
                exercise_type,
                exercises: vec![],
                duration: 30.0,
            },
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_entries_returned_in_append_order() {
        let store = HealthStore::new(MemoryStorage::new());
        for i in 0..5 {
            store
                .add_diet_entry(meal_at(local(2024, 3, 12, 8 + i, 0), 100.0 * (i + 1) as f64))
                .unwrap();
        }

        let entries = store.diet_entries();
        assert_eq!(entries.len(), 5);
        let calories: Vec<f64> = entries.iter().map(|e| e.total_calories).collect();
        assert_eq!(calories, vec![100.0, 200.0, 300.0, 400.0, 500.0]);
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let store = HealthStore::new(MemoryStorage::new());
        let entry = meal_at(local(2024, 3, 12, 12, 30), 450.0);
        store.add_diet_entry(entry.clone()).unwrap();

        let loaded = store.diet_entries();
        assert_eq!(loaded, vec![entry]);
    }

    #[test]
    fn test_exercise_round_trip_preserves_every_field() {
        let store = HealthStore::new(MemoryStorage::new());
        let entry = ExerciseEntry::create_at(
            ExerciseEntryCreate {
                exercise_type: ExerciseType::Strength,
                exercises: vec![crate::models::Exercise {
                    name: "squat".to_string(),
                    sets: Some(5),
                    reps: Some(5),
                    weight: Some(185.0),
                    duration: None,
                    distance: None,
                }],
                duration: 45.0,
            },
            local(2024, 3, 12, 7, 0),
        )
        .unwrap();
        store.add_exercise_entry(entry.clone()).unwrap();

        assert_eq!(store.exercise_entries(), vec![entry]);
    }

    #[test]
    fn test_missing_key_reads_empty() {
        let store = HealthStore::new(MemoryStorage::new());
        assert!(store.diet_entries().is_empty());
        assert!(store.exercise_entries().is_empty());
    }

    #[test]
    fn test_corrupt_blob_reads_empty() {
        let storage = MemoryStorage::new();
        storage.set(DIET_ENTRIES_KEY, "not json {").unwrap();

        let store = HealthStore::new(storage);
        assert!(store.diet_entries().is_empty());
    }

    #[test]
    fn test_read_failure_reads_empty() {
        let store = HealthStore::new(FailingStorage);
        assert!(store.diet_entries().is_empty());
        assert!(store.todays_exercise_entries().is_empty());
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let store = HealthStore::new(FailingStorage);
        let result = store.add_diet_entry(meal_at(local(2024, 3, 12, 9, 0), 200.0));
        assert!(matches!(result, Err(StoreError::Storage(_))));

        assert!(store.clear_health_data().is_err());
    }

    #[test]
    fn test_todays_filter_excludes_yesterday() {
        let store = HealthStore::new(MemoryStorage::new());
        let today = local(2024, 3, 12, 10, 0);
        let exactly_24h_before = local(2024, 3, 11, 10, 0);
        let earlier_today = local(2024, 3, 12, 0, 15);

        store.add_diet_entry(meal_at(exactly_24h_before, 100.0)).unwrap();
        store.add_diet_entry(meal_at(earlier_today, 200.0)).unwrap();

        let todays = store.diet_entries_on(today.date_naive());
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].total_calories, 200.0);
    }

    #[test]
    fn test_todays_exercise_filter() {
        let store = HealthStore::new(MemoryStorage::new());
        let day = local(2024, 3, 12, 6, 0);

        store
            .add_exercise_entry(workout_at(day, ExerciseType::Cardio))
            .unwrap();
        store
            .add_exercise_entry(workout_at(local(2024, 3, 10, 6, 0), ExerciseType::Walking))
            .unwrap();

        let todays = store.exercise_entries_on(day.date_naive());
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].exercise_type, ExerciseType::Cardio);
    }

    #[test]
    fn test_unparseable_date_excluded_from_day_filter() {
        let storage = MemoryStorage::new();
        storage
            .set(
                DIET_ENTRIES_KEY,
                r#"[{"id":"1","date":"yesterday-ish","mealType":"lunch","foods":[{"name":"x","calories":1.0,"protein":0.0,"carbs":0.0,"fat":0.0}],"totalCalories":1.0,"totalProtein":0.0,"totalCarbs":0.0,"totalFat":0.0}]"#,
            )
            .unwrap();

        let store = HealthStore::new(storage);
        // the malformed date keeps the entry readable but undateable
        assert_eq!(store.diet_entries().len(), 1);
        assert!(store
            .diet_entries_on(local(2024, 3, 12, 0, 0).date_naive())
            .is_empty());
    }

    #[test]
    fn test_clear_health_data_empties_both_collections() {
        let store = HealthStore::new(MemoryStorage::new());
        store.add_diet_entry(meal_at(local(2024, 3, 12, 8, 0), 100.0)).unwrap();
        store
            .add_exercise_entry(workout_at(local(2024, 3, 12, 9, 0), ExerciseType::Strength))
            .unwrap();

        store.clear_health_data().unwrap();

        assert!(store.diet_entries().is_empty());
        assert!(store.exercise_entries().is_empty());
    }

    #[test]
    fn test_clear_leaves_unrelated_keys() {
        let storage = MemoryStorage::new();
        storage.set("@something_else", "kept").unwrap();

        let store = HealthStore::new(storage.clone());
        store.add_diet_entry(meal_at(local(2024, 3, 12, 8, 0), 100.0)).unwrap();
        store.clear_health_data().unwrap();

        assert!(store.diet_entries().is_empty());
        assert_eq!(storage.get("@something_else").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_add_overwrites_corrupt_blob() {
        let storage = MemoryStorage::new();
        storage.set(DIET_ENTRIES_KEY, "garbage").unwrap();

        let store = HealthStore::new(storage);
        store.add_diet_entry(meal_at(local(2024, 3, 12, 8, 0), 100.0)).unwrap();

        // the unreadable blob is replaced by a fresh single-entry list
        assert_eq!(store.diet_entries().len(), 1);
    }
}
