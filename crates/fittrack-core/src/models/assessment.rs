// ABOUTME: Assessment record models for skinfold-based body-composition sessions
// ABOUTME: SkinfoldSet, BodyMetrics, AssessmentPhotos, and Assessment definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The seven caliper sites of the Jackson & Pollock 7-site protocol
///
/// Each value is a skinfold thickness in millimeters. All seven sites are
/// required; the unweighted sum feeds the body-density regression.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkinfoldSet {
    /// Vertical fold on the back of the upper arm (mm)
    pub triceps: f64,
    /// Diagonal fold below the shoulder blade (mm)
    pub subscapular: f64,
    /// Vertical fold on the front of the upper arm (mm)
    pub biceps: f64,
    /// Vertical fold on the midaxillary line (mm)
    pub mid_axillary: f64,
    /// Diagonal fold above the iliac crest (mm)
    pub suprailiac: f64,
    /// Vertical fold beside the umbilicus (mm)
    pub abdominal: f64,
    /// Vertical fold on the front of the thigh (mm)
    pub thigh: f64,
}

impl SkinfoldSet {
    /// Unweighted sum of the seven sites in millimeters
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.triceps
            + self.subscapular
            + self.biceps
            + self.mid_axillary
            + self.suprailiac
            + self.abdominal
            + self.thigh
    }

    /// The seven sites as `(label, value)` pairs, in protocol order
    #[must_use]
    pub fn sites(&self) -> [(&'static str, f64); 7] {
        [
            ("triceps", self.triceps),
            ("subscapular", self.subscapular),
            ("biceps", self.biceps),
            ("midAxillary", self.mid_axillary),
            ("suprailiac", self.suprailiac),
            ("abdominal", self.abdominal),
            ("thigh", self.thigh),
        ]
    }
}

/// Derived body-composition quantities, stored denormalized on the assessment
///
/// Body density and the skinfold sum keep full precision; fat percentage
/// and the mass quantities are rounded to two decimals for storage.
/// Invariant: `fat_mass_kg + lean_mass_kg` equals the session weight within
/// floating rounding, and `body_fat_percentage` is always derived from
/// `body_density` via the Siri equation, never the reverse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetrics {
    /// Estimated whole-body density (kg/L), typically 1.0-1.1
    pub body_density: f64,
    /// Body-fat percentage from the Siri equation (2 dp)
    pub body_fat_percentage: f64,
    /// Fat mass in kilograms (2 dp)
    pub fat_mass_kg: f64,
    /// Lean mass in kilograms (2 dp)
    pub lean_mass_kg: f64,
    /// Sum of the seven skinfolds in millimeters
    pub sum_skinfolds: f64,
}

/// Named photo view slots captured during an assessment
///
/// Each slot holds an encoded image string produced by the photo encoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPhotos {
    /// Front view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
    /// Back view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    /// Right side view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_right: Option<String>,
    /// Left side view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_left: Option<String>,
}

/// The four capture angles of the photo set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PhotoAngle {
    /// Front view
    Front,
    /// Back view
    Back,
    /// Right side view
    SideRight,
    /// Left side view
    SideLeft,
}

impl AssessmentPhotos {
    /// Whether no slot holds a photo
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front.is_none()
            && self.back.is_none()
            && self.side_right.is_none()
            && self.side_left.is_none()
    }

    /// Read the photo in a named slot
    #[must_use]
    pub const fn get(&self, angle: PhotoAngle) -> Option<&String> {
        match angle {
            PhotoAngle::Front => self.front.as_ref(),
            PhotoAngle::Back => self.back.as_ref(),
            PhotoAngle::SideRight => self.side_right.as_ref(),
            PhotoAngle::SideLeft => self.side_left.as_ref(),
        }
    }

    /// Place an encoded photo in a named slot, replacing any previous one
    pub fn set(&mut self, angle: PhotoAngle, encoded: String) {
        match angle {
            PhotoAngle::Front => self.front = Some(encoded),
            PhotoAngle::Back => self.back = Some(encoded),
            PhotoAngle::SideRight => self.side_right = Some(encoded),
            PhotoAngle::SideLeft => self.side_left = Some(encoded),
        }
    }
}

/// One body-composition measurement session
///
/// Created by the composition pipeline at submission time and never
/// mutated afterwards. Assessments are append-only; they are deleted only
/// by bulk removal of the owning patient's data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Unique identifier for this assessment
    pub id: String,
    /// Identifier of the owning patient
    pub patient_id: String,
    /// Calendar date of the measurement session
    pub date: NaiveDate,
    /// Body weight at the session in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Raw caliper measurements
    pub skinfolds: SkinfoldSet,
    /// Derived quantities, computed once at creation
    pub metrics: BodyMetrics,
    /// Progress photos, when captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<AssessmentPhotos>,
    /// Free-text session notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn folds() -> SkinfoldSet {
        SkinfoldSet {
            triceps: 18.0,
            subscapular: 22.0,
            biceps: 12.0,
            mid_axillary: 16.0,
            suprailiac: 25.0,
            abdominal: 28.0,
            thigh: 22.0,
        }
    }

    #[test]
    fn sum_is_unweighted_total() {
        let diff: f64 = folds().sum() - 143.0;
        assert!(diff.abs() < f64::EPSILON);
    }

    #[test]
    fn skinfolds_serialize_with_camel_case_names() {
        let json = serde_json::to_value(folds()).unwrap();
        assert!(json.get("midAxillary").is_some());
        assert!(json.get("mid_axillary").is_none());
    }

    #[test]
    fn empty_photo_slots_are_skipped_in_json() {
        let photos = AssessmentPhotos {
            front: Some("data:image/png;base64,AAAA".into()),
            ..AssessmentPhotos::default()
        };
        let json = serde_json::to_value(&photos).unwrap();
        assert!(json.get("front").is_some());
        assert!(json.get("back").is_none());
    }

    #[test]
    fn photo_slot_roundtrip() {
        let mut photos = AssessmentPhotos::default();
        assert!(photos.is_empty());
        photos.set(PhotoAngle::SideLeft, "data:image/jpeg;base64,BBBB".into());
        assert_eq!(
            photos.get(PhotoAngle::SideLeft).map(String::as_str),
            Some("data:image/jpeg;base64,BBBB")
        );
        assert!(!photos.is_empty());
    }
}
