// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures log levels and output format for the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

//! Structured logging setup built on `tracing`

use anyhow::Result;
use fittrack_core::constants::env;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine-readable logs
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Read logging settings from the environment
    ///
    /// `FITTRACK_LOG_LEVEL` sets the filter directive and
    /// `FITTRACK_LOG_FORMAT` the output format; unknown values fall back
    /// to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = std::env::var(env::LOG_LEVEL).unwrap_or(defaults.level);
        let format = std::env::var(env::LOG_FORMAT).map_or(defaults.format, |name| {
            match name.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "compact" => LogFormat::Compact,
                _ => LogFormat::Pretty,
            }
        });
        Self { level, format }
    }

    /// Install the global tracing subscriber for this configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the level filter cannot be parsed or a
    /// subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)?;
        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_target(false)
                    .with_writer(io::stdout)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_target(false)
                    .with_writer(io::stdout);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stdout);
                registry.with(compact_layer).try_init()?;
            }
        }

        tracing::info!(level = %self.level, "logging initialized");
        Ok(())
    }
}

/// Install the global tracing subscriber from environment settings
///
/// # Errors
///
/// Returns an error when the level filter cannot be parsed or a
/// subscriber is already installed.
pub fn init_logging() -> Result<()> {
    LoggingConfig::from_env().init()
}
