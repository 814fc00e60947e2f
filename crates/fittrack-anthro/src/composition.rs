// ABOUTME: Skinfold-based body-composition calculations
// ABOUTME: Implements Jackson & Pollock 7-site density regression and the Siri equation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

//! Body-composition pipeline: skinfold sum → body density → body-fat
//! percentage → fat/lean mass.
//!
//! # Scientific References
//!
//! - Jackson, A.S., & Pollock, M.L. (1978). "Generalized equations for
//!   predicting body density of men." *British Journal of Nutrition*, 40(3), 497-504.
//! - Jackson, A.S., Pollock, M.L., & Ward, A. (1980). "Generalized equations
//!   for predicting body density of women." *Medicine & Science in Sports &
//!   Exercise*, 12(3), 175-181.
//! - Siri, W.E. (1961). "Body composition from fluid spaces and density."
//!   In *Techniques for Measuring Body Composition*, 223-244.

use chrono::{Datelike, NaiveDate};
use fittrack_core::models::{BodyMetrics, Sex, SkinfoldSet};

/// Completed years between `birth_date` and `reference`
///
/// Decrements by one when the reference month/day precedes the birth
/// month/day (no birthday yet in the reference year). Callers pass the
/// assessment date as the reference so stored metrics do not drift as the
/// patient ages.
#[must_use]
pub fn age_on(birth_date: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth_date.year();
    if (reference.month(), reference.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Estimated whole-body density (kg/L) from the 7-site skinfold sum
///
/// Jackson & Pollock quadratic regression with sex-specific coefficients:
///
/// - Male: `1.112 - 0.00043499*S + 0.00000055*S² - 0.00028826*age`
/// - Female: `1.097 - 0.00046971*S + 0.00000056*S² - 0.00012828*age`
///
/// where `S` is the sum of the seven skinfolds in millimeters. Inputs are
/// not bounds-checked: negative or extreme values propagate arithmetically.
/// The regression is validated for sums well below the quadratic vertex
/// (~395 mm male, ~419 mm female); keeping caliper entries in their
/// physiological range is the caller's concern.
#[must_use]
pub fn body_density(sum_mm: f64, age_years: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => {
            1.112 - 0.000_434_99 * sum_mm + 0.000_000_55 * sum_mm * sum_mm
                - 0.000_288_26 * age_years
        }
        Sex::Female => {
            1.097 - 0.000_469_71 * sum_mm + 0.000_000_56 * sum_mm * sum_mm
                - 0.000_128_28 * age_years
        }
    }
}

/// Body-fat percentage from body density via the Siri equation
///
/// `((4.95 / density) - 4.50) * 100`. A density of exactly zero yields
/// infinity; that is a degenerate input, not expected from the regression
/// above, and is deliberately not intercepted here.
#[must_use]
pub fn body_fat_percentage(density: f64) -> f64 {
    ((4.95 / density) - 4.50) * 100.0
}

/// Derive the full metrics record for one assessment
///
/// Sums the seven folds, runs the density regression and the Siri
/// equation, then splits body weight into fat and lean mass. Fat
/// percentage and the mass quantities are rounded to two decimals for
/// storage; density and the skinfold sum keep full precision.
///
/// Pure and side-effect free: safe to call on every input change.
///
/// # Examples
///
/// ```rust
/// use fittrack_anthro::composition::derive_metrics;
/// use fittrack_core::models::{Sex, SkinfoldSet};
///
/// let folds = SkinfoldSet {
///     triceps: 12.0,
///     subscapular: 15.0,
///     biceps: 8.0,
///     mid_axillary: 11.0,
///     suprailiac: 18.0,
///     abdominal: 20.0,
///     thigh: 16.0,
/// };
/// let metrics = derive_metrics(&folds, 80.0, 35, Sex::Male);
/// assert!((metrics.sum_skinfolds - 100.0).abs() < f64::EPSILON);
/// assert!((metrics.fat_mass_kg + metrics.lean_mass_kg - 80.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn derive_metrics(
    skinfolds: &SkinfoldSet,
    weight_kg: f64,
    age_years: i32,
    sex: Sex,
) -> BodyMetrics {
    let sum = skinfolds.sum();
    let density = body_density(sum, f64::from(age_years), sex);
    let fat_percentage = body_fat_percentage(density);
    let fat_mass = weight_kg * fat_percentage / 100.0;
    let lean_mass = weight_kg - fat_mass;

    BodyMetrics {
        body_density: density,
        body_fat_percentage: round2(fat_percentage),
        fat_mass_kg: round2(fat_mass),
        lean_mass_kg: round2(lean_mass),
        sum_skinfolds: sum,
    }
}

/// Round to two decimal places for storage and display
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years_only() {
        let birth = date(1990, 5, 15);
        assert_eq!(age_on(birth, date(2025, 5, 14)), 34);
        assert_eq!(age_on(birth, date(2025, 5, 15)), 35);
        assert_eq!(age_on(birth, date(2025, 12, 1)), 35);
        assert_eq!(age_on(birth, date(2025, 1, 1)), 34);
    }

    #[test]
    fn density_reference_value_male() {
        let density = body_density(100.0, 30.0, Sex::Male);
        assert!((density - 1.065_353_2).abs() < 1e-9);
    }

    #[test]
    fn density_reference_value_female() {
        let density = body_density(100.0, 30.0, Sex::Female);
        assert!((density - 1.051_780_6).abs() < 1e-9);
    }

    #[test]
    fn siri_reference_values() {
        let male = body_fat_percentage(body_density(100.0, 30.0, Sex::Male));
        assert!((male - 14.63).abs() < 0.005);

        let female = body_fat_percentage(body_density(100.0, 30.0, Sex::Female));
        assert!((female - 20.63).abs() < 0.005);
    }

    #[test]
    fn density_decreases_with_sum_below_vertex() {
        for sex in [Sex::Male, Sex::Female] {
            let mut previous = body_density(0.0, 30.0, sex);
            for step in 1..=35 {
                let sum = f64::from(step) * 10.0;
                let current = body_density(sum, 30.0, sex);
                assert!(current < previous, "density rose at sum {sum} for {sex:?}");
                previous = current;
            }
        }
    }

    #[test]
    fn density_decreases_with_age() {
        for sex in [Sex::Male, Sex::Female] {
            let mut previous = body_density(120.0, 18.0, sex);
            for age in 19..=80 {
                let current = body_density(120.0, f64::from(age), sex);
                assert!(current < previous, "density rose at age {age} for {sex:?}");
                previous = current;
            }
        }
    }

    #[test]
    fn mass_split_sums_to_weight() {
        let folds = SkinfoldSet {
            triceps: 18.0,
            subscapular: 22.0,
            biceps: 12.0,
            mid_axillary: 16.0,
            suprailiac: 25.0,
            abdominal: 28.0,
            thigh: 22.0,
        };
        let metrics = derive_metrics(&folds, 88.0, 35, Sex::Male);
        assert!((metrics.fat_mass_kg + metrics.lean_mass_kg - 88.0).abs() < 1e-9);
    }

    #[test]
    fn stored_quantities_are_rounded_to_two_decimals() {
        let folds = SkinfoldSet {
            triceps: 11.3,
            subscapular: 14.7,
            biceps: 7.9,
            mid_axillary: 10.1,
            suprailiac: 17.4,
            abdominal: 19.8,
            thigh: 15.6,
        };
        let metrics = derive_metrics(&folds, 74.35, 28, Sex::Female);
        for value in [
            metrics.body_fat_percentage,
            metrics.fat_mass_kg,
            metrics.lean_mass_kg,
        ] {
            assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let folds = SkinfoldSet {
            triceps: 15.0,
            subscapular: 18.0,
            biceps: 10.0,
            mid_axillary: 14.0,
            suprailiac: 22.0,
            abdominal: 25.0,
            thigh: 20.0,
        };
        let first = derive_metrics(&folds, 85.0, 34, Sex::Male);
        let second = derive_metrics(&folds, 85.0, 34, Sex::Male);
        assert_eq!(first, second);
    }
}
