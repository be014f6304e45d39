//! Diet entry model
//!
//! Represents one logged meal with its food items and cached macro totals.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{NutritionTotals, ValidationError};

/// Meal type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snacks" | "snack" => Some(MealType::Snacks),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

/// One food item within a meal, with per-item macros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodItem {
    /// Validate that no macro value is negative
    fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ];
        for (field, value) in fields {
            if value < 0.0 {
                return Err(ValidationError::NegativeMacro {
                    name: self.name.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

/// A logged meal, immutable once saved
///
/// Totals are computed once at creation and stored redundantly; they are
/// never re-derived from `foods` after persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietEntry {
    pub id: String,
    pub date: String,
    pub meal_type: MealType,
    pub foods: Vec<FoodItem>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

/// Data for creating a diet entry
#[derive(Debug, Clone)]
pub struct DietEntryCreate {
    pub meal_type: MealType,
    pub foods: Vec<FoodItem>,
}

impl DietEntry {
    /// Create a new diet entry stamped with the current local time
    pub fn create(data: DietEntryCreate) -> Result<Self, ValidationError> {
        Self::create_at(data, Local::now())
    }

    /// Create a new diet entry with an explicit reference time
    pub fn create_at(
        data: DietEntryCreate,
        now: DateTime<Local>,
    ) -> Result<Self, ValidationError> {
        if data.foods.is_empty() {
            return Err(ValidationError::EmptyMeal);
        }
        for food in &data.foods {
            food.validate()?;
        }

        let total_calories = data.foods.iter().map(|f| f.calories).sum();
        let total_protein = data.foods.iter().map(|f| f.protein).sum();
        let total_carbs = data.foods.iter().map(|f| f.carbs).sum();
        let total_fat = data.foods.iter().map(|f| f.fat).sum();

        Ok(Self {
            id: now.timestamp_millis().to_string(),
            date: now.to_rfc3339(),
            meal_type: data.meal_type,
            foods: data.foods,
            total_calories,
            total_protein,
            total_carbs,
            total_fat,
        })
    }

    /// Cached macro totals as a summable value
    pub fn nutrition_totals(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.total_calories,
            protein: self.total_protein,
            carbs: self.total_carbs,
            fat: self.total_fat,
        }
    }
}
