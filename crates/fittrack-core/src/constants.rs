// ABOUTME: Application constants organized by domain for the fittrack platform
// ABOUTME: Storage keys, environment variable names, measurement and photo limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

//! Constants module
//!
//! Application constants grouped by domain. The storage keys mirror the
//! single-blob collections the tracker persists; each key addresses one
//! whole serialized collection.

/// Storage keys for the persisted collections
pub mod storage_keys {
    /// Patient roster collection
    pub const PATIENTS: &str = "fit_patients";
    /// Assessment history collection (append-only)
    pub const ASSESSMENTS: &str = "fit_assessments";
    /// Meal plan collection
    pub const MEAL_PLANS: &str = "fit_meal_plans";
    /// Registered practitioner accounts
    pub const USERS: &str = "fit_users";
    /// Active session record
    pub const SESSION: &str = "fit_session";
}

/// Environment variable names read by the application configuration
pub mod env {
    /// Overrides the data directory for file-backed storage
    pub const DATA_DIR: &str = "FITTRACK_DATA_DIR";
    /// Selects the storage backend ("file" or "memory")
    pub const STORAGE_BACKEND: &str = "FITTRACK_STORAGE";
    /// Log level filter (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "FITTRACK_LOG_LEVEL";
    /// Log output format (pretty, compact, json)
    pub const LOG_FORMAT: &str = "FITTRACK_LOG_FORMAT";
}

/// Measurement and comparison limits
pub mod limits {
    /// Deltas with absolute value below this threshold count as unchanged
    pub const UNCHANGED_EPSILON: f64 = 0.01;
    /// Skinfold calipers read up to 65-80 mm; anything above is an entry error
    pub const MAX_SKINFOLD_MM: f64 = 80.0;
    /// Upper bound on accepted body weight entries (kg)
    pub const MAX_WEIGHT_KG: f64 = 400.0;
    /// Upper bound on accepted height entries (cm)
    pub const MAX_HEIGHT_CM: f64 = 260.0;
}

/// Photo attachment policy
pub mod photos {
    /// Maximum accepted image payload in bytes (2 MiB)
    pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;
    /// Image content types the encoder accepts
    pub const SUPPORTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];
}

/// bcrypt cost factor for password hashing
pub const BCRYPT_COST: u32 = 12;
