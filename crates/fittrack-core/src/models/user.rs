// ABOUTME: Practitioner account models for the acting user
// ABOUTME: Practitioner, UserSettings, and Theme definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use serde::{Deserialize, Serialize};

/// Interface color theme preference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// Per-account interface settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Preferred color theme
    pub theme: Theme,
}

/// The acting practitioner account
///
/// This is the public shape of an account: it never carries credentials.
/// Calculations take no dependency on the practitioner beyond attribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    /// Unique identifier for the account
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Professional registry code (e.g. CREF), when provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cref: Option<String>,
    /// Avatar image reference, when provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Interface settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,
}
