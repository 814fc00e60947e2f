// ABOUTME: Demo seed data installed on first use of an empty store
// ABOUTME: One demo patient with a year of assessment history for flow validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use chrono::{NaiveDate, Utc};
use fittrack_core::models::{
    Assessment, BodyMetrics, Patient, Sex, SkinfoldSet,
};

/// Identifier of the seeded demo patient
pub const DEMO_PATIENT_ID: &str = "demo-patient-001";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are compile-time constants; fall back to epoch rather
    // than panicking in library code.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The demo patient installed when the roster is first read
#[must_use]
pub fn demo_patient() -> Patient {
    Patient {
        id: DEMO_PATIENT_ID.to_owned(),
        name: "Demo Patient".to_owned(),
        email: "demo@fittrack.local".to_owned(),
        phone: "(11) 99999-9999".to_owned(),
        birth_date: date(1990, 5, 15),
        sex: Sex::Male,
        height_cm: 180.0,
        observations: Some("Seeded record for flow validation.".to_owned()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A year of assessment history for the demo patient
///
/// Three sessions showing steady recomposition, enough to exercise the
/// history chart and the before/after comparison flows.
#[must_use]
pub fn demo_assessments() -> Vec<Assessment> {
    vec![
        Assessment {
            id: "demo-assessment-001".to_owned(),
            patient_id: DEMO_PATIENT_ID.to_owned(),
            date: date(2025, 1, 15),
            weight_kg: 88.0,
            skinfolds: SkinfoldSet {
                triceps: 18.0,
                subscapular: 22.0,
                biceps: 12.0,
                mid_axillary: 16.0,
                suprailiac: 25.0,
                abdominal: 28.0,
                thigh: 22.0,
            },
            metrics: BodyMetrics {
                body_density: 1.03,
                body_fat_percentage: 28.5,
                fat_mass_kg: 25.0,
                lean_mass_kg: 63.0,
                sum_skinfolds: 143.0,
            },
            photos: None,
            notes: None,
        },
        Assessment {
            id: "demo-assessment-002".to_owned(),
            patient_id: DEMO_PATIENT_ID.to_owned(),
            date: date(2025, 6, 10),
            weight_kg: 85.0,
            skinfolds: SkinfoldSet {
                triceps: 15.0,
                subscapular: 18.0,
                biceps: 10.0,
                mid_axillary: 14.0,
                suprailiac: 22.0,
                abdominal: 25.0,
                thigh: 20.0,
            },
            metrics: BodyMetrics {
                body_density: 1.04,
                body_fat_percentage: 25.5,
                fat_mass_kg: 21.6,
                lean_mass_kg: 63.4,
                sum_skinfolds: 124.0,
            },
            photos: None,
            notes: None,
        },
        Assessment {
            id: "demo-assessment-003".to_owned(),
            patient_id: DEMO_PATIENT_ID.to_owned(),
            date: date(2025, 12, 23),
            weight_kg: 80.0,
            skinfolds: SkinfoldSet {
                triceps: 12.0,
                subscapular: 15.0,
                biceps: 8.0,
                mid_axillary: 11.0,
                suprailiac: 18.0,
                abdominal: 20.0,
                thigh: 16.0,
            },
            metrics: BodyMetrics {
                body_density: 1.06,
                body_fat_percentage: 18.2,
                fat_mass_kg: 14.5,
                lean_mass_kg: 65.5,
                sum_skinfolds: 100.0,
            },
            photos: None,
            notes: None,
        },
    ]
}
