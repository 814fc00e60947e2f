// ABOUTME: Environment-driven application configuration
// ABOUTME: Data directory, storage backend selection, and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use crate::logging::LoggingConfig;
use fittrack_core::constants::env;
use fittrack_core::errors::{AppError, AppResult};
use std::path::PathBuf;

/// Which storage backend persists the collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON files under the data directory (default)
    File,
    /// Ephemeral in-memory store
    Memory,
}

/// Application configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted collection files
    pub data_dir: PathBuf,
    /// Selected storage backend
    pub storage_backend: StorageBackend,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Resolve configuration from environment variables
    ///
    /// `FITTRACK_DATA_DIR` overrides the platform data directory;
    /// `FITTRACK_STORAGE` selects `file` (default) or `memory`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` when no data directory can be
    /// resolved or the backend name is unknown.
    pub fn from_env() -> AppResult<Self> {
        let data_dir = match std::env::var(env::DATA_DIR) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_dir()
                .map(|base| base.join("fittrack"))
                .ok_or_else(|| {
                    AppError::config(format!(
                        "no platform data directory; set {}",
                        env::DATA_DIR
                    ))
                })?,
        };

        let storage_backend = match std::env::var(env::STORAGE_BACKEND) {
            Ok(name) => match name.to_lowercase().as_str() {
                "file" => StorageBackend::File,
                "memory" => StorageBackend::Memory,
                other => {
                    return Err(AppError::config(format!(
                        "unknown storage backend {other:?}; expected \"file\" or \"memory\""
                    )))
                }
            },
            Err(_) => StorageBackend::File,
        };

        Ok(Self {
            data_dir,
            storage_backend,
            logging: LoggingConfig::from_env(),
        })
    }

    /// In-memory configuration for tests and ephemeral sessions
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            data_dir: std::env::temp_dir().join("fittrack"),
            storage_backend: StorageBackend::Memory,
            logging: LoggingConfig::default(),
        }
    }
}
