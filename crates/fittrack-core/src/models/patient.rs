// ABOUTME: Patient profile model with the biometric context for calculations
// ABOUTME: Patient and Sex definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Biological sex, as used by the anthropometric regressions
///
/// Serialized as the single letters `"M"`/`"F"` to match the stored
/// collection blobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male coefficients apply
    #[serde(rename = "M")]
    Male,
    /// Female coefficients apply
    #[serde(rename = "F")]
    Female,
}

/// A patient tracked by the practitioner
///
/// Carries the identity and biometric context (sex, birth date, height)
/// the composition calculator needs as input. Owns zero or more
/// assessments, ordered by date.
///
/// # Examples
///
/// ```rust
/// use fittrack_core::models::{Patient, Sex};
/// use chrono::{NaiveDate, Utc};
///
/// let patient = Patient {
///     id: "p-001".into(),
///     name: "Ana Souza".into(),
///     email: "ana@example.com".into(),
///     phone: "(11) 98765-4321".into(),
///     birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
///     sex: Sex::Female,
///     height_cm: 168.0,
///     observations: None,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique identifier for the patient
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Date of birth; age is derived per assessment, never stored
    pub birth_date: NaiveDate,
    /// Biological sex for the regression coefficients
    #[serde(rename = "gender")]
    pub sex: Sex,
    /// Standing height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Free-text clinical observations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    /// When this record was first created
    pub created_at: DateTime<Utc>,
    /// When this record was last modified
    pub updated_at: DateTime<Utc>,
}
