// ABOUTME: Energy and macronutrient calculations for meal planning
// ABOUTME: Implements Mifflin-St Jeor BMR, activity-scaled TDEE, and macro distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

//! Meal-plan arithmetic: basal metabolic rate, daily energy expenditure,
//! and macronutrient gram targets.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., St Jeor, S.T., et al. (1990). "A new predictive equation
//!   for resting energy expenditure in healthy individuals." *The American
//!   Journal of Clinical Nutrition*, 51(2), 241-247.

use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::Sex;
use serde::{Deserialize, Serialize};

/// Physical activity level scaling basal energy to daily expenditure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    Extra,
}

impl ActivityLevel {
    /// Parse an activity level from its stored label
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "extra" => Self::Extra,
            _ => Self::Sedentary,
        }
    }

    /// Stored label for the level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Extra => "extra",
        }
    }

    /// Multiplier applied to basal metabolic rate
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::Extra => 1.9,
        }
    }
}

/// Basal metabolic rate via the Mifflin-St Jeor equation (kcal/day)
///
/// - Male: `10*weight + 6.25*height - 5*age + 5`
/// - Female: `10*weight + 6.25*height - 5*age - 161`
#[must_use]
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure: BMR scaled by activity level (kcal/day)
#[must_use]
pub fn daily_energy_expenditure(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * level.multiplier()
}

/// Percentage shares for splitting calories into macronutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroRatio {
    /// Share of calories from protein (0-100)
    pub protein_pct: f64,
    /// Share of calories from carbohydrates (0-100)
    pub carbs_pct: f64,
    /// Share of calories from fat (0-100)
    pub fat_pct: f64,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    /// Protein target (g)
    pub protein_g: f64,
    /// Carbohydrate target (g)
    pub carbs_g: f64,
    /// Fat target (g)
    pub fat_g: f64,
}

/// Split a calorie target into macro gram targets
///
/// Protein and carbohydrates convert at 4 kcal/g, fat at 9 kcal/g; each
/// target is rounded to the nearest gram.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the shares do not sum to 100.
pub fn distribute_macros(calories: f64, ratio: MacroRatio) -> AppResult<MacroSplit> {
    let total = ratio.protein_pct + ratio.carbs_pct + ratio.fat_pct;
    if (total - 100.0).abs() > 1e-6 {
        return Err(AppError::invalid_input(format!(
            "Macro shares must sum to 100, got {total}"
        )));
    }

    Ok(MacroSplit {
        protein_g: (calories * ratio.protein_pct / 100.0 / 4.0).round(),
        carbs_g: (calories * ratio.carbs_pct / 100.0 / 4.0).round(),
        fat_g: (calories * ratio.fat_pct / 100.0 / 9.0).round(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn bmr_reference_values() {
        let male = basal_metabolic_rate(80.0, 180.0, 30, Sex::Male);
        assert!((male - 1780.0).abs() < 1e-9);

        let female = basal_metabolic_rate(60.0, 165.0, 25, Sex::Female);
        assert!((female - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn tdee_scales_by_activity_multiplier() {
        let bmr = basal_metabolic_rate(80.0, 180.0, 30, Sex::Male);
        let tdee = daily_energy_expenditure(bmr, ActivityLevel::Moderate);
        assert!((tdee - 2759.0).abs() < 1e-9);
    }

    #[test]
    fn activity_label_roundtrip() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::Extra,
        ] {
            assert_eq!(ActivityLevel::from_str_lossy(level.as_str()), level);
        }
        // Unknown labels fall back to sedentary
        assert_eq!(
            ActivityLevel::from_str_lossy("couch"),
            ActivityLevel::Sedentary
        );
    }

    #[test]
    fn macros_round_to_whole_grams() {
        let split = distribute_macros(
            2000.0,
            MacroRatio {
                protein_pct: 30.0,
                carbs_pct: 40.0,
                fat_pct: 30.0,
            },
        )
        .unwrap();
        assert!((split.protein_g - 150.0).abs() < 1e-9);
        assert!((split.carbs_g - 200.0).abs() < 1e-9);
        assert!((split.fat_g - 67.0).abs() < 1e-9);
    }

    #[test]
    fn macro_shares_must_sum_to_hundred() {
        let result = distribute_macros(
            1800.0,
            MacroRatio {
                protein_pct: 30.0,
                carbs_pct: 30.0,
                fat_pct: 30.0,
            },
        );
        assert!(result.is_err());
    }
}
