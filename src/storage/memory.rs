// ABOUTME: In-memory storage backend over a locked hash map
// ABOUTME: Test substitute and fallback for ephemeral sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use super::StorageProvider;
use fittrack_core::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory blob storage
///
/// The lock only makes handles shareable; all mutation still happens on a
/// single logical thread in response to discrete user actions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| AppError::storage("storage lock poisoned"))?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| AppError::storage("storage lock poisoned"))?;
        blobs.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| AppError::storage("storage lock poisoned"))?;
        blobs.remove(key);
        Ok(())
    }
}
