// ABOUTME: Integration tests for account registration and session management
// ABOUTME: Verifies hashing, credential checks, and that secrets never reach the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::auth::RegistrationInput;
use fittrack::context::AppContext;
use fittrack_core::constants::storage_keys;

fn registration(email: &str) -> RegistrationInput {
    RegistrationInput {
        name: "Pat Silva".into(),
        email: email.into(),
        password: "correct horse battery".into(),
        cref: Some("012345-G/SP".into()),
    }
}

#[test]
fn test_register_opens_a_session() {
    let ctx = AppContext::in_memory();
    let profile = ctx.auth().register(registration("pat@example.com")).unwrap();

    let session = ctx.auth().current().unwrap().unwrap();
    assert_eq!(session.id, profile.id);
    assert_eq!(session.email, "pat@example.com");
}

#[test]
fn test_login_and_logout_cycle() {
    let ctx = AppContext::in_memory();
    ctx.auth().register(registration("pat@example.com")).unwrap();
    ctx.auth().logout().unwrap();
    assert!(ctx.auth().current().unwrap().is_none());

    let profile = ctx
        .auth()
        .login("pat@example.com", "correct horse battery")
        .unwrap();
    assert_eq!(profile.email, "pat@example.com");
    assert!(ctx.auth().current().unwrap().is_some());
}

#[test]
fn test_wrong_credentials_are_rejected() {
    let ctx = AppContext::in_memory();
    ctx.auth().register(registration("pat@example.com")).unwrap();
    ctx.auth().logout().unwrap();

    assert!(ctx.auth().login("pat@example.com", "wrong password").is_err());
    assert!(ctx
        .auth()
        .login("nobody@example.com", "correct horse battery")
        .is_err());
    // Failed logins never open a session
    assert!(ctx.auth().current().unwrap().is_none());
}

#[test]
fn test_duplicate_email_is_rejected() {
    let ctx = AppContext::in_memory();
    ctx.auth().register(registration("pat@example.com")).unwrap();
    assert!(ctx.auth().register(registration("PAT@example.com")).is_err());
}

#[test]
fn test_registration_validation() {
    let ctx = AppContext::in_memory();

    let mut missing_name = registration("a@example.com");
    missing_name.name = "  ".into();
    assert!(ctx.auth().register(missing_name).is_err());

    let mut bad_email = registration("nope");
    bad_email.email = "nope".into();
    assert!(ctx.auth().register(bad_email).is_err());

    let mut short_password = registration("b@example.com");
    short_password.password = "short".into();
    assert!(ctx.auth().register(short_password).is_err());
}

#[test]
fn test_no_secret_material_reaches_the_session_blob() {
    let ctx = AppContext::in_memory();
    ctx.auth().register(registration("pat@example.com")).unwrap();

    let session_blob: serde_json::Value = ctx
        .storage()
        .load_record(storage_keys::SESSION)
        .unwrap()
        .unwrap();
    assert!(session_blob.get("passwordHash").is_none());

    // The account collection stores a hash, never the plaintext
    let accounts_blob: serde_json::Value = ctx
        .storage()
        .load_record(storage_keys::USERS)
        .unwrap()
        .unwrap();
    let account = &accounts_blob.as_array().unwrap()[0];
    let hash = account.get("passwordHash").unwrap().as_str().unwrap();
    assert!(hash.starts_with("$2"));
    assert!(!accounts_blob.to_string().contains("correct horse battery"));
}
