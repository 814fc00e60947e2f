// ABOUTME: Append-only assessment store with boundary validation
// ABOUTME: The single construction path running the composition pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use crate::demo;
use crate::storage::Storage;
use chrono::NaiveDate;
use fittrack_anthro::composition;
use fittrack_core::constants::{limits, storage_keys};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{Assessment, AssessmentPhotos, Patient, SkinfoldSet};
use uuid::Uuid;

/// Validated input for recording a new assessment
///
/// Metrics are never part of the input: they are derived exactly once by
/// [`AssessmentStore::record`].
#[derive(Debug, Clone)]
pub struct AssessmentInput {
    /// Calendar date of the measurement session
    pub date: NaiveDate,
    /// Body weight at the session in kilograms
    pub weight_kg: f64,
    /// Raw caliper measurements
    pub skinfolds: SkinfoldSet,
    /// Progress photos, when captured
    pub photos: Option<AssessmentPhotos>,
    /// Free-text session notes
    pub notes: Option<String>,
}

/// Append-only assessment history backed by a single stored collection
///
/// Assessments are immutable once created. There is no update or delete
/// here; removal happens only through the patient store's cascading
/// delete.
#[derive(Clone)]
pub struct AssessmentStore {
    storage: Storage,
}

impl AssessmentStore {
    /// Create a history over the given storage handle
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// All assessments, seeding demo history on very first read
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read or
    /// written.
    pub fn list(&self) -> AppResult<Vec<Assessment>> {
        match self
            .storage
            .load_record::<Vec<Assessment>>(storage_keys::ASSESSMENTS)?
        {
            Some(assessments) => Ok(assessments),
            None => {
                let seeded = demo::demo_assessments();
                self.storage
                    .save_collection(storage_keys::ASSESSMENTS, &seeded)?;
                tracing::info!("seeded demo assessments into empty history");
                Ok(seeded)
            }
        }
    }

    /// A patient's assessments in chronological order
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read.
    pub fn list_by_patient(&self, patient_id: &str) -> AppResult<Vec<Assessment>> {
        let mut assessments: Vec<Assessment> = self
            .list()?
            .into_iter()
            .filter(|a| a.patient_id == patient_id)
            .collect();
        assessments.sort_by_key(|a| a.date);
        Ok(assessments)
    }

    /// Record a new assessment for `patient`
    ///
    /// This is the only construction path: input is validated at the
    /// boundary, age is computed from the patient's birth date as of the
    /// session date, and metrics are derived by the composition pipeline
    /// before the record is appended.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput`/`ValueOutOfRange` when the input
    /// fails validation, or a storage error.
    pub fn record(&self, patient: &Patient, input: AssessmentInput) -> AppResult<Assessment> {
        validate_input(&input)?;

        let age = composition::age_on(patient.birth_date, input.date);
        if age < 0 {
            return Err(AppError::invalid_input(format!(
                "assessment date {} precedes the patient's birth date {}",
                input.date, patient.birth_date
            )));
        }

        let metrics =
            composition::derive_metrics(&input.skinfolds, input.weight_kg, age, patient.sex);

        let assessment = Assessment {
            id: Uuid::new_v4().to_string(),
            patient_id: patient.id.clone(),
            date: input.date,
            weight_kg: input.weight_kg,
            skinfolds: input.skinfolds,
            metrics,
            photos: input.photos.filter(|p| !p.is_empty()),
            notes: input.notes.filter(|n| !n.trim().is_empty()),
        };

        self.append(assessment.clone())?;
        tracing::info!(
            assessment_id = %assessment.id,
            patient_id = %patient.id,
            body_fat = assessment.metrics.body_fat_percentage,
            "assessment recorded"
        );
        Ok(assessment)
    }

    /// Append an already-constructed assessment
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceAlreadyExists` on identifier collision,
    /// or a storage error.
    pub fn append(&self, assessment: Assessment) -> AppResult<()> {
        let mut assessments = self.list()?;
        if assessments.iter().any(|a| a.id == assessment.id) {
            return Err(AppError::already_exists(format!(
                "assessment {}",
                assessment.id
            )));
        }
        assessments.push(assessment);
        self.storage
            .save_collection(storage_keys::ASSESSMENTS, &assessments)
    }
}

fn validate_input(input: &AssessmentInput) -> AppResult<()> {
    if !input.weight_kg.is_finite() || input.weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "weight must be a positive number, got {}",
            input.weight_kg
        )));
    }
    if input.weight_kg > limits::MAX_WEIGHT_KG {
        return Err(AppError::out_of_range(format!(
            "weight {} kg exceeds the accepted maximum {}",
            input.weight_kg,
            limits::MAX_WEIGHT_KG
        )));
    }

    for (site, value) in input.skinfolds.sites() {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "skinfold {site} must be a non-negative number, got {value}"
            )));
        }
        if value > limits::MAX_SKINFOLD_MM {
            return Err(AppError::out_of_range(format!(
                "skinfold {site} of {value} mm exceeds the caliper maximum {}",
                limits::MAX_SKINFOLD_MM
            )));
        }
    }
    Ok(())
}
