// ABOUTME: Core types and constants for the fittrack assessment platform
// ABOUTME: Foundation crate with domain models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

#![deny(unsafe_code)]

//! # Fittrack Core
//!
//! Foundation crate providing shared types and constants for the fittrack
//! assessment platform. This crate is designed to change infrequently and
//! performs no I/O of its own.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Core data records (Patient, Assessment, `SkinfoldSet`, `MealPlan`, etc.)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Patient, Assessment, `MealPlan`, Practitioner)
pub mod models;
