// ABOUTME: File-backed storage with one JSON document per collection key
// ABOUTME: Whole-file replace on write, mirroring single-blob persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use super::StorageProvider;
use fittrack_core::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed blob storage
///
/// Each key maps to `<data_dir>/<key>.json`. Reads parse the whole file;
/// writes replace it. Two processes pointed at the same directory are
/// last-writer-wins, the same hazard the single-blob model has everywhere.
#[derive(Debug)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `data_dir`, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn new(data_dir: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::storage(format!(
                "cannot create data directory {}: {e}",
                data_dir.display()
            ))
        })?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        // Keys are fixed constants, but reject separators anyway so a
        // corrupted key can never escape the data directory.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(AppError::invalid_input(format!("invalid storage key {key:?}")));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

impl StorageProvider for FileStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|e| {
            AppError::storage(format!("cannot write {}: {e}", path.display()))
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "cannot remove {}: {e}",
                path.display()
            ))),
        }
    }
}

impl FileStorage {
    /// Directory this store writes into
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
