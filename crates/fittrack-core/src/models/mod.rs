// ABOUTME: Core data models for the fittrack assessment platform
// ABOUTME: Re-exports Patient, Assessment, SkinfoldSet, MealPlan and related records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

//! # Data Models
//!
//! Core data records used throughout fittrack. Every persisted record
//! serializes to JSON with camelCase field names, matching the stored
//! collection blobs.
//!
//! ## Design Principles
//!
//! - **Explicit shapes**: fully-enumerated record types; no free-form bags
//! - **Serializable**: all models support JSON serialization for the blob store
//! - **Immutable assessments**: an `Assessment` is never mutated after creation
//!
//! ## Core Models
//!
//! - `Patient`: identity and biometric context for calculations
//! - `Assessment`: one body-composition measurement session
//! - `SkinfoldSet` / `BodyMetrics`: raw caliper input and derived quantities
//! - `MealPlan`: nutrition targets and meals for a patient
//! - `Practitioner`: the acting user account

// Domain modules
mod assessment;
mod meal_plan;
mod patient;
mod user;

// Re-export all public types for convenience
pub use assessment::{Assessment, AssessmentPhotos, BodyMetrics, PhotoAngle, SkinfoldSet};
pub use meal_plan::{FoodItem, Meal, MealPlan, NutritionGoals};
pub use patient::{Patient, Sex};
pub use user::{Practitioner, Theme, UserSettings};
