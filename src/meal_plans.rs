// ABOUTME: Meal plan store with a single-active-plan invariant per patient
// ABOUTME: Goal suggestion from the nutrition engine (BMR, TDEE, macro split)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use crate::storage::Storage;
use chrono::NaiveDate;
use fittrack_anthro::composition;
use fittrack_anthro::nutrition::{self, ActivityLevel, MacroRatio};
use fittrack_core::constants::storage_keys;
use fittrack_core::errors::AppResult;
use fittrack_core::models::{MealPlan, NutritionGoals, Patient};

/// Meal plans backed by a single stored collection
#[derive(Clone)]
pub struct MealPlanStore {
    storage: Storage,
}

impl MealPlanStore {
    /// Create a plan store over the given storage handle
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// All stored meal plans
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read.
    pub fn list(&self) -> AppResult<Vec<MealPlan>> {
        self.storage.load_collection(storage_keys::MEAL_PLANS)
    }

    /// A patient's plans, newest first
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read.
    pub fn list_by_patient(&self, patient_id: &str) -> AppResult<Vec<MealPlan>> {
        let mut plans: Vec<MealPlan> = self
            .list()?
            .into_iter()
            .filter(|p| p.patient_id == patient_id)
            .collect();
        plans.sort_by_key(|p| std::cmp::Reverse(p.date));
        Ok(plans)
    }

    /// The patient's active plan, if any
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read.
    pub fn active_for(&self, patient_id: &str) -> AppResult<Option<MealPlan>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|p| p.patient_id == patient_id && p.active))
    }

    /// Insert or replace a plan, matched by identifier
    ///
    /// Saving an active plan deactivates the patient's other plans so at
    /// most one is active at a time.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read or
    /// written.
    pub fn upsert(&self, plan: MealPlan) -> AppResult<MealPlan> {
        let mut plans = self.list()?;

        if plan.active {
            for other in plans
                .iter_mut()
                .filter(|p| p.patient_id == plan.patient_id && p.id != plan.id)
            {
                other.active = false;
            }
        }

        match plans.iter_mut().find(|p| p.id == plan.id) {
            Some(existing) => *existing = plan.clone(),
            None => plans.push(plan.clone()),
        }
        self.storage.save_collection(storage_keys::MEAL_PLANS, &plans)?;
        tracing::debug!(plan_id = %plan.id, patient_id = %plan.patient_id, "meal plan saved");
        Ok(plan)
    }

    /// Suggest daily goals for a patient from the nutrition engine
    ///
    /// Age is taken as of `reference_date`; energy comes from
    /// Mifflin-St Jeor scaled by the activity level, and the macro split
    /// is applied to that target.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the macro shares do not sum
    /// to 100.
    pub fn suggest_goals(
        patient: &Patient,
        current_weight_kg: f64,
        level: ActivityLevel,
        ratio: MacroRatio,
        reference_date: NaiveDate,
    ) -> AppResult<NutritionGoals> {
        let age = composition::age_on(patient.birth_date, reference_date);
        let bmr = nutrition::basal_metabolic_rate(
            current_weight_kg,
            patient.height_cm,
            age,
            patient.sex,
        );
        let calories = nutrition::daily_energy_expenditure(bmr, level).round();
        let macros = nutrition::distribute_macros(calories, ratio)?;

        Ok(NutritionGoals {
            calories,
            protein: macros.protein_g,
            carbs: macros.carbs_g,
            fat: macros.fat_g,
            activity_level: level.as_str().to_owned(),
        })
    }
}
