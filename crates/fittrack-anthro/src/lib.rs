// ABOUTME: Anthropometric calculation engine for the fittrack platform
// ABOUTME: Body-composition formulas, longitudinal comparison, and nutrition math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

#![deny(unsafe_code)]

//! # Fittrack Anthro
//!
//! The calculation engine of the fittrack platform. Every function in this
//! crate is pure and synchronous: no I/O, no shared mutable state,
//! deterministic for given inputs. Callers may recompute on every input
//! change; the computations are cheap and idempotent.
//!
//! ## Modules
//!
//! - **composition**: skinfold sums to body density, body-fat percentage,
//!   and derived mass quantities
//! - **comparison**: chronological pairing of assessments and delta reports
//! - **nutrition**: basal metabolic rate, energy expenditure, and macro split

/// Skinfold-based body-composition calculations
pub mod composition;

/// Longitudinal assessment comparison and delta classification
pub mod comparison;

/// Energy and macronutrient calculations for meal planning
pub mod nutrition;
