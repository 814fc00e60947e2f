// ABOUTME: Practitioner account registration and session management
// ABOUTME: bcrypt-hashed credentials with a public-only session record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

use crate::storage::Storage;
use fittrack_core::constants::{storage_keys, BCRYPT_COST};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{Practitioner, UserSettings};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored account record; the hash never leaves this module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAccount {
    #[serde(flatten)]
    profile: Practitioner,
    password_hash: String,
}

/// Validated input for creating a practitioner account
#[derive(Debug, Clone)]
pub struct RegistrationInput {
    /// Display name
    pub name: String,
    /// Login email, unique across accounts
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Professional registry code, when provided
    pub cref: Option<String>,
}

/// Account registry and session manager
///
/// The session persists only the public practitioner record; credentials
/// stay in the account collection as bcrypt hashes. The core calculations
/// take no dependency on the session beyond attribution.
#[derive(Clone)]
pub struct AuthManager {
    storage: Storage,
}

impl AuthManager {
    /// Create an auth manager over the given storage handle
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Register a new account and open a session for it
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` on malformed input,
    /// `AppError::ResourceAlreadyExists` when the email is taken, or a
    /// storage error.
    pub fn register(&self, input: RegistrationInput) -> AppResult<Practitioner> {
        validate_registration(&input)?;

        let mut accounts = self.accounts()?;
        if accounts
            .iter()
            .any(|a| a.profile.email.eq_ignore_ascii_case(&input.email))
        {
            return Err(AppError::already_exists(format!("account {}", input.email)));
        }

        let password_hash = bcrypt::hash(&input.password, BCRYPT_COST)
            .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))?;

        let profile = Practitioner {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            cref: input.cref,
            avatar: None,
            settings: Some(UserSettings::default()),
        };

        accounts.push(StoredAccount {
            profile: profile.clone(),
            password_hash,
        });
        self.storage.save_collection(storage_keys::USERS, &accounts)?;
        self.storage.save_record(storage_keys::SESSION, &profile)?;
        tracing::info!(user_id = %profile.id, "account registered");
        Ok(profile)
    }

    /// Open a session for an existing account
    ///
    /// # Errors
    ///
    /// Returns `AppError::AuthInvalid` when the email or password does
    /// not match, or a storage error.
    pub fn login(&self, email: &str, password: &str) -> AppResult<Practitioner> {
        let accounts = self.accounts()?;
        let account = accounts
            .iter()
            .find(|a| a.profile.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| AppError::auth_invalid("unknown email or wrong password"))?;

        let verified = bcrypt::verify(password, &account.password_hash)
            .map_err(|e| AppError::internal(format!("password verification failed: {e}")))?;
        if !verified {
            tracing::warn!(email, "failed login attempt");
            return Err(AppError::auth_invalid("unknown email or wrong password"));
        }

        self.storage
            .save_record(storage_keys::SESSION, &account.profile)?;
        tracing::info!(user_id = %account.profile.id, "session opened");
        Ok(account.profile.clone())
    }

    /// Close the current session, if any
    ///
    /// # Errors
    ///
    /// Returns an error when the session record cannot be removed.
    pub fn logout(&self) -> AppResult<()> {
        self.storage.remove(storage_keys::SESSION)?;
        tracing::info!("session closed");
        Ok(())
    }

    /// The practitioner of the current session, if one is open
    ///
    /// # Errors
    ///
    /// Returns an error when the session record cannot be read.
    pub fn current(&self) -> AppResult<Option<Practitioner>> {
        self.storage.load_record(storage_keys::SESSION)
    }

    /// Update the current session's profile (settings, avatar)
    ///
    /// # Errors
    ///
    /// Returns `AppError::AuthRequired` when no session is open, or a
    /// storage error.
    pub fn update_profile(&self, profile: Practitioner) -> AppResult<Practitioner> {
        let current = self.current()?.ok_or_else(AppError::auth_required)?;

        let mut accounts = self.accounts()?;
        let account = accounts
            .iter_mut()
            .find(|a| a.profile.id == current.id)
            .ok_or_else(|| AppError::not_found(format!("account {}", current.id)))?;

        account.profile = Practitioner {
            id: current.id,
            ..profile
        };
        let updated = account.profile.clone();
        self.storage.save_collection(storage_keys::USERS, &accounts)?;
        self.storage.save_record(storage_keys::SESSION, &updated)?;
        Ok(updated)
    }

    fn accounts(&self) -> AppResult<Vec<StoredAccount>> {
        self.storage.load_collection(storage_keys::USERS)
    }
}

fn validate_registration(input: &RegistrationInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if input.email.trim().is_empty() || !input.email.contains('@') {
        return Err(AppError::invalid_input(format!(
            "invalid email address {:?}",
            input.email
        )));
    }
    if input.password.len() < 8 {
        return Err(AppError::invalid_input(
            "password must be at least 8 characters",
        ));
    }
    Ok(())
}
