// ABOUTME: Storage abstraction layer for whole-collection blob persistence
// ABOUTME: Pluggable backend support (in-memory, file) behind a single provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

//! Key-value blob storage with pluggable backends.
//!
//! Every collection persists as one serialized JSON blob under a fixed
//! key; a write replaces the entire collection. There is no incremental
//! or transactional update path, and two sessions writing the same key
//! are last-writer-wins. Handles are injected into the domain stores at
//! construction so tests can substitute the in-memory backend.

/// File-backed storage implementation
pub mod file;
/// In-memory storage implementation
pub mod memory;

use crate::config::{AppConfig, StorageBackend};
use fittrack_core::errors::AppResult;
use file::FileStorage;
use memory::MemoryStorage;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Storage provider trait for pluggable backend implementations
///
/// Implementations are synchronous: reads and writes complete before
/// returning and never suspend.
pub trait StorageProvider: Send + Sync {
    /// Read the raw blob stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the blob stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the blob stored under `key`; removing an absent key is a no-op
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be written.
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Unified storage handle over the configured backend
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<dyn StorageProvider>,
}

impl Storage {
    /// Create a storage handle from the application configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the file backend cannot prepare its data
    /// directory.
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        match config.storage_backend {
            StorageBackend::Memory => {
                tracing::info!("initializing in-memory storage");
                Ok(Self::memory())
            }
            StorageBackend::File => {
                tracing::info!(dir = %config.data_dir.display(), "initializing file storage");
                Ok(Self {
                    inner: Arc::new(FileStorage::new(config.data_dir.clone())?),
                })
            }
        }
    }

    /// In-memory storage, used as the test substitute
    #[must_use]
    pub fn memory() -> Self {
        Self {
            inner: Arc::new(MemoryStorage::new()),
        }
    }

    /// Wrap a custom provider implementation
    pub fn from_provider(provider: impl StorageProvider + 'static) -> Self {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Load a whole collection, defaulting to empty when the key is absent
    ///
    /// # Errors
    ///
    /// Returns an error when the backend read fails or the stored blob
    /// does not deserialize.
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> AppResult<Vec<T>> {
        match self.inner.read(key)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace a whole collection
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the backend write fails.
    pub fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> AppResult<()> {
        let blob = serde_json::to_string(items)?;
        self.inner.write(key, &blob)
    }

    /// Load a single stored record, if present
    ///
    /// # Errors
    ///
    /// Returns an error when the backend read fails or the stored blob
    /// does not deserialize.
    pub fn load_record<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.inner.read(key)? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    /// Replace a single stored record
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the backend write fails.
    pub fn save_record<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let blob = serde_json::to_string(value)?;
        self.inner.write(key, &blob)
    }

    /// Remove whatever is stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error when the backend write fails.
    pub fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key)
    }
}
