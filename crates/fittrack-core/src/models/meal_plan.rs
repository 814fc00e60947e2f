// ABOUTME: Meal planning models for patient nutrition targets
// ABOUTME: FoodItem, Meal, NutritionGoals, and MealPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single food entry within a meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Unique identifier within the plan
    pub id: String,
    /// Food name
    pub name: String,
    /// Energy per portion (kcal)
    pub calories: f64,
    /// Protein per portion (g)
    pub protein: f64,
    /// Carbohydrates per portion (g)
    pub carbs: f64,
    /// Fat per portion (g)
    pub fat: f64,
    /// Portion description ("100g", "1 cup", ...)
    pub amount: String,
}

/// A named meal with its scheduled time and foods
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique identifier within the plan
    pub id: String,
    /// Meal name ("Breakfast", "Post-workout", ...)
    pub name: String,
    /// Scheduled time of day ("07:30")
    pub time: String,
    /// Foods making up the meal
    pub foods: Vec<FoodItem>,
}

impl Meal {
    /// Total energy of the meal (kcal)
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.foods.iter().map(|f| f.calories).sum()
    }
}

/// Daily nutrition targets for a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoals {
    /// Daily energy target (kcal)
    pub calories: f64,
    /// Daily protein target (g)
    pub protein: f64,
    /// Daily carbohydrate target (g)
    pub carbs: f64,
    /// Daily fat target (g)
    pub fat: f64,
    /// Activity level label the targets were derived from
    pub activity_level: String,
}

/// A meal plan assigned to a patient
///
/// At most one plan per patient is active at a time; activating a plan
/// deactivates the others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Unique identifier for the plan
    pub id: String,
    /// Identifier of the owning patient
    pub patient_id: String,
    /// Date the plan takes effect
    pub date: NaiveDate,
    /// Daily nutrition targets
    pub goals: NutritionGoals,
    /// Meals making up the plan
    pub meals: Vec<Meal>,
    /// Whether this is the patient's active plan
    pub active: bool,
}

impl MealPlan {
    /// Total planned energy across all meals (kcal)
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(Meal::total_calories).sum()
    }
}
