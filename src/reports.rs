// ABOUTME: Report view models assembled for the export collaborator
// ABOUTME: Before/after comparison and chronological progress series, data only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

//! Export view models.
//!
//! The export collaborator (print/PDF rendering) receives only computed
//! data from here; no formatting or layout logic lives in this module.

use chrono::NaiveDate;
use fittrack_anthro::comparison::{self, MetricDelta};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{Assessment, MealPlan, Patient};
use serde::{Deserialize, Serialize};

/// One caliper site's before/after values for the comparison chart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinfoldRow {
    /// Site label in stored-field form ("triceps", "midAxillary", ...)
    pub site: String,
    /// Thickness at the earlier assessment (mm)
    pub before_mm: f64,
    /// Thickness at the later assessment (mm)
    pub after_mm: f64,
}

/// Complete before/after analysis for one patient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// The analyzed patient
    pub patient: Patient,
    /// The chronologically earlier assessment
    pub before: Assessment,
    /// The chronologically later assessment
    pub after: Assessment,
    /// Whole days between the two sessions
    pub elapsed_days: i64,
    /// Per-metric deltas with qualitative status
    pub deltas: Vec<MetricDelta>,
    /// Per-site skinfold values for the grouped chart
    pub skinfold_rows: Vec<SkinfoldRow>,
}

/// Build the before/after report for two of a patient's assessments
///
/// The pair is resolved into chronological order regardless of argument
/// order.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` when either assessment does not
/// belong to `patient` or the two belong to different patients.
pub fn comparison_report(
    patient: &Patient,
    a: &Assessment,
    b: &Assessment,
) -> AppResult<ComparisonReport> {
    if a.patient_id != patient.id || b.patient_id != patient.id {
        return Err(AppError::invalid_input(format!(
            "assessments do not belong to patient {}",
            patient.id
        )));
    }

    let report = comparison::compute_deltas(a, b)?;
    let (before, after) = comparison::order_pair(a, b);

    let skinfold_rows = before
        .skinfolds
        .sites()
        .into_iter()
        .zip(after.skinfolds.sites())
        .map(|((site, before_mm), (_, after_mm))| SkinfoldRow {
            site: site.to_owned(),
            before_mm,
            after_mm,
        })
        .collect();

    Ok(ComparisonReport {
        patient: patient.clone(),
        before: before.clone(),
        after: after.clone(),
        elapsed_days: report.elapsed_days,
        deltas: report.deltas,
        skinfold_rows,
    })
}

/// One point of the longitudinal progress series
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    /// Session date
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body-fat percentage
    pub body_fat_percentage: f64,
    /// Lean mass (kg)
    pub lean_mass_kg: f64,
    /// Sum of skinfolds (mm)
    pub sum_skinfolds: f64,
}

/// Chronological series of a patient's assessments for trend charts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// The charted patient's identifier
    pub patient_id: String,
    /// Points in ascending date order
    pub points: Vec<ProgressPoint>,
}

/// Build the progress series from a patient's assessment history
///
/// Accepts the history in any order and sorts ascending by date.
#[must_use]
pub fn progress_report(patient_id: &str, assessments: &[Assessment]) -> ProgressReport {
    let mut points: Vec<ProgressPoint> = assessments
        .iter()
        .filter(|a| a.patient_id == patient_id)
        .map(|a| ProgressPoint {
            date: a.date,
            weight_kg: a.weight_kg,
            body_fat_percentage: a.metrics.body_fat_percentage,
            lean_mass_kg: a.metrics.lean_mass_kg,
            sum_skinfolds: a.metrics.sum_skinfolds,
        })
        .collect();
    points.sort_by_key(|p| p.date);
    ProgressReport {
        patient_id: patient_id.to_owned(),
        points,
    }
}

/// Everything the printable patient dossier needs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDossier {
    /// The patient record
    pub patient: Patient,
    /// Full assessment history, ascending by date
    pub assessments: Vec<Assessment>,
    /// The active meal plan, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_plan: Option<MealPlan>,
}

/// Assemble the printable dossier for a patient
#[must_use]
pub fn patient_dossier(
    patient: Patient,
    mut assessments: Vec<Assessment>,
    active_plan: Option<MealPlan>,
) -> PatientDossier {
    assessments.retain(|a| a.patient_id == patient.id);
    assessments.sort_by_key(|a| a.date);
    PatientDossier {
        patient,
        assessments,
        active_plan,
    }
}
