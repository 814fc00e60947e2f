// ABOUTME: Patient roster store over the blob storage layer
// ABOUTME: Upsert-by-id semantics with cascading delete of owned records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use crate::demo;
use crate::storage::Storage;
use chrono::{NaiveDate, Utc};
use fittrack_core::constants::{limits, storage_keys};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{Assessment, MealPlan, Patient, Sex};
use uuid::Uuid;

/// Validated input for registering a new patient
///
/// An explicit record shape: every field the roster needs, nothing
/// free-form.
#[derive(Debug, Clone)]
pub struct NewPatient {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Biological sex for the regression coefficients
    pub sex: Sex,
    /// Standing height in centimeters
    pub height_cm: f64,
    /// Free-text clinical observations
    pub observations: Option<String>,
}

/// Patient roster backed by a single stored collection
///
/// The storage handle is injected at construction; substitute the
/// in-memory backend in tests.
#[derive(Clone)]
pub struct PatientStore {
    storage: Storage,
}

impl PatientStore {
    /// Create a roster over the given storage handle
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// All patients, seeding the demo patient on very first read
    ///
    /// Seeding happens only when the collection has never been written;
    /// an explicitly emptied roster stays empty.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read or
    /// written.
    pub fn list(&self) -> AppResult<Vec<Patient>> {
        match self.storage.load_record::<Vec<Patient>>(storage_keys::PATIENTS)? {
            Some(patients) => Ok(patients),
            None => {
                let seeded = vec![demo::demo_patient()];
                self.storage.save_collection(storage_keys::PATIENTS, &seeded)?;
                tracing::info!("seeded demo patient into empty roster");
                Ok(seeded)
            }
        }
    }

    /// Look up one patient by identifier
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read.
    pub fn get(&self, id: &str) -> AppResult<Option<Patient>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    /// Look up one patient by identifier, failing if absent
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` when no patient has `id`.
    pub fn get_required(&self, id: &str) -> AppResult<Patient> {
        self.get(id)?
            .ok_or_else(|| AppError::not_found(format!("patient {id}")))
    }

    /// Register a new patient with a generated identifier
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput`/`ValueOutOfRange` when the input
    /// fails validation, or a storage error.
    pub fn create(&self, input: NewPatient) -> AppResult<Patient> {
        validate_new_patient(&input)?;

        let now = Utc::now();
        let patient = Patient {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            birth_date: input.birth_date,
            sex: input.sex,
            height_cm: input.height_cm,
            observations: input.observations,
            created_at: now,
            updated_at: now,
        };
        self.upsert(patient)
    }

    /// Insert or replace a patient, matched by identifier
    ///
    /// Refreshes `updated_at` on the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing collection cannot be read or
    /// written.
    pub fn upsert(&self, mut patient: Patient) -> AppResult<Patient> {
        patient.updated_at = Utc::now();

        let mut patients = self.list()?;
        match patients.iter_mut().find(|p| p.id == patient.id) {
            Some(existing) => *existing = patient.clone(),
            None => patients.push(patient.clone()),
        }
        self.storage.save_collection(storage_keys::PATIENTS, &patients)?;
        tracing::debug!(patient_id = %patient.id, "patient saved");
        Ok(patient)
    }

    /// Delete a patient and bulk-remove every record the patient owns
    ///
    /// Assessments and meal plans belonging to the patient are dropped
    /// from their collections in the same pass; this is the only path
    /// that ever removes assessments.
    ///
    /// # Errors
    ///
    /// Returns an error when any backing collection cannot be read or
    /// written.
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut patients = self.list()?;
        patients.retain(|p| p.id != id);
        self.storage.save_collection(storage_keys::PATIENTS, &patients)?;

        let assessments: Vec<Assessment> = self
            .storage
            .load_collection::<Assessment>(storage_keys::ASSESSMENTS)?
            .into_iter()
            .filter(|a| a.patient_id != id)
            .collect();
        self.storage
            .save_collection(storage_keys::ASSESSMENTS, &assessments)?;

        let plans: Vec<MealPlan> = self
            .storage
            .load_collection::<MealPlan>(storage_keys::MEAL_PLANS)?
            .into_iter()
            .filter(|p| p.patient_id != id)
            .collect();
        self.storage.save_collection(storage_keys::MEAL_PLANS, &plans)?;

        tracing::info!(patient_id = %id, "patient and owned records removed");
        Ok(())
    }
}

fn validate_new_patient(input: &NewPatient) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if input.email.trim().is_empty() || !input.email.contains('@') {
        return Err(AppError::invalid_input(format!(
            "invalid email address {:?}",
            input.email
        )));
    }
    if !input.height_cm.is_finite()
        || input.height_cm <= 0.0
        || input.height_cm > limits::MAX_HEIGHT_CM
    {
        return Err(AppError::out_of_range(format!(
            "height {} cm outside accepted range (0, {}]",
            input.height_cm,
            limits::MAX_HEIGHT_CM
        )));
    }
    Ok(())
}
