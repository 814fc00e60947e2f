// ABOUTME: Composed application context wiring storage into the domain stores
// ABOUTME: Dependency injection root replacing any process-wide singleton state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use crate::assessments::AssessmentStore;
use crate::auth::AuthManager;
use crate::config::AppConfig;
use crate::meal_plans::MealPlanStore;
use crate::patients::PatientStore;
use crate::storage::Storage;
use fittrack_core::errors::AppResult;

/// Composed application context
///
/// Owns the storage handle and hands out the domain stores built over
/// it. Construct one per application session; there is no global
/// instance. Tests build an in-memory context and get full isolation.
#[derive(Clone)]
pub struct AppContext {
    config: AppConfig,
    storage: Storage,
    patients: PatientStore,
    assessments: AssessmentStore,
    meal_plans: MealPlanStore,
    auth: AuthManager,
}

impl AppContext {
    /// Build a context from resolved configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend cannot initialize.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let storage = Storage::new(&config)?;
        Ok(Self::with_storage(config, storage))
    }

    /// Build a context over an explicit storage handle
    #[must_use]
    pub fn with_storage(config: AppConfig, storage: Storage) -> Self {
        Self {
            config,
            patients: PatientStore::new(storage.clone()),
            assessments: AssessmentStore::new(storage.clone()),
            meal_plans: MealPlanStore::new(storage.clone()),
            auth: AuthManager::new(storage.clone()),
            storage,
        }
    }

    /// Ephemeral in-memory context for tests
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_storage(AppConfig::ephemeral(), Storage::memory())
    }

    /// Resolved configuration
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The underlying storage handle
    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Patient roster store
    #[must_use]
    pub const fn patients(&self) -> &PatientStore {
        &self.patients
    }

    /// Assessment history store
    #[must_use]
    pub const fn assessments(&self) -> &AssessmentStore {
        &self.assessments
    }

    /// Meal plan store
    #[must_use]
    pub const fn meal_plans(&self) -> &MealPlanStore {
        &self.meal_plans
    }

    /// Account and session manager
    #[must_use]
    pub const fn auth(&self) -> &AuthManager {
        &self.auth
    }
}
