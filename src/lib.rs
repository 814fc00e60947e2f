// ABOUTME: Main library entry point for the fittrack assessment platform
// ABOUTME: Wires storage, domain stores, auth, photos, and report assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

#![deny(unsafe_code)]

//! # Fittrack
//!
//! A client-side fitness-assessment tracker: patient profiles, periodic
//! skinfold-based body-composition assessments, progress photos, and meal
//! plans, persisted locally as whole-collection JSON blobs. There is no
//! backend and no network surface.
//!
//! ## Architecture
//!
//! - **fittrack-core**: data models, unified errors, constants
//! - **fittrack-anthro**: the pure calculation engine (composition,
//!   comparison, nutrition)
//! - **fittrack** (this crate): storage backends, domain stores, auth,
//!   photo encoding, report assembly
//!
//! Everything in the engine is synchronous and deterministic; the
//! application layer owns the only I/O (blob reads and writes).
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::assessments::AssessmentInput;
//! use fittrack::context::AppContext;
//! use fittrack_core::models::SkinfoldSet;
//! use chrono::NaiveDate;
//!
//! # fn main() -> fittrack_core::errors::AppResult<()> {
//! let ctx = AppContext::in_memory();
//! let patient = ctx.patients().list()?.remove(0);
//!
//! let assessment = ctx.assessments().record(
//!     &patient,
//!     AssessmentInput {
//!         date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap_or_default(),
//!         weight_kg: 82.5,
//!         skinfolds: SkinfoldSet {
//!             triceps: 14.0,
//!             subscapular: 17.0,
//!             biceps: 9.0,
//!             mid_axillary: 12.0,
//!             suprailiac: 20.0,
//!             abdominal: 23.0,
//!             thigh: 18.0,
//!         },
//!         photos: None,
//!         notes: None,
//!     },
//! )?;
//! assert!(assessment.metrics.body_fat_percentage > 0.0);
//! # Ok(())
//! # }
//! ```

/// Append-only assessment store and boundary validation
pub mod assessments;

/// Practitioner accounts and session management
pub mod auth;

/// Environment-driven application configuration
pub mod config;

/// Composed application context (dependency injection root)
pub mod context;

/// Demo seed data for first-run flows
pub mod demo;

/// Structured logging setup
pub mod logging;

/// Meal plan store and goal suggestion
pub mod meal_plans;

/// Patient roster store
pub mod patients;

/// Photo encoding for progress pictures
pub mod photos;

/// Report view models for the export collaborator
pub mod reports;

/// Whole-collection blob storage with pluggable backends
pub mod storage;

// Re-export the engine and foundation crates under their concern names
pub use fittrack_anthro::{comparison, composition, nutrition};
pub use fittrack_core::{constants, errors, models};
