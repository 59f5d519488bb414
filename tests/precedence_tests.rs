// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests against the real process environment.
//!
//! Every test holds the shared environment lock and restores the variables it
//! touched, so they can run alongside the other tests in this binary.

mod common;

use common::{env_lock, fixture_dir, EnvGuard};
use envsafe::prelude::*;
use std::env;

#[test]
fn test_export_sets_process_variables() {
    let _lock = env_lock();
    let mut guard = EnvGuard::new();
    guard.remove("ENVSAFE_PRECEDENCE_GREETING");

    let dir = fixture_dir(&[(".env", "ENVSAFE_PRECEDENCE_GREETING=hello world\n")]);
    let options = LoadOptions::new()
        .with_path(dir.path().join(".env"))
        .without_defaults()
        .with_export(true);

    envsafe::config(&options).unwrap();

    assert_eq!(
        env::var("ENVSAFE_PRECEDENCE_GREETING").as_deref(),
        Ok("hello world")
    );
}

#[test]
fn test_process_variables_win_over_file() {
    let _lock = env_lock();
    let mut guard = EnvGuard::new();
    guard.set("ENVSAFE_PRECEDENCE_KEEP", "Hello there");

    let dir = fixture_dir(&[(".env", "ENVSAFE_PRECEDENCE_KEEP=from file\n")]);
    let options = LoadOptions::new()
        .with_path(dir.path().join(".env"))
        .without_defaults()
        .with_export(true);

    let config = envsafe::config(&options).unwrap();

    assert_eq!(config.get("ENVSAFE_PRECEDENCE_KEEP"), Some("from file"));
    assert_eq!(
        env::var("ENVSAFE_PRECEDENCE_KEEP").as_deref(),
        Ok("Hello there")
    );
}

#[test]
fn test_safe_mode_reads_process_environment() {
    let _lock = env_lock();
    let mut guard = EnvGuard::new();

    let dir = fixture_dir(&[
        (".env", "GREETING=hello world\n"),
        (".env.example", "GREETING=\nENVSAFE_PRECEDENCE_ANOTHER=\n"),
    ]);
    let options = LoadOptions::new()
        .with_path(dir.path().join(".env"))
        .with_example(dir.path().join(".env.example"))
        .without_defaults()
        .with_safe(true);

    guard.remove("ENVSAFE_PRECEDENCE_ANOTHER");
    assert!(envsafe::config(&options).is_err());

    guard.set("ENVSAFE_PRECEDENCE_ANOTHER", "VAR");
    assert!(envsafe::config(&options).is_ok());

    guard.set("ENVSAFE_PRECEDENCE_ANOTHER", "");
    assert!(envsafe::config(&options).is_err());
    assert!(envsafe::config(&options.with_allow_empty_values(true)).is_ok());
}

#[test]
fn test_failed_safe_mode_exports_nothing() {
    let _lock = env_lock();
    let mut guard = EnvGuard::new();
    guard.remove("ENVSAFE_PRECEDENCE_UNEXPORTED");
    guard.remove("ENVSAFE_PRECEDENCE_REQUIRED");

    let dir = fixture_dir(&[
        (".env", "ENVSAFE_PRECEDENCE_UNEXPORTED=value\n"),
        (".env.example", "ENVSAFE_PRECEDENCE_REQUIRED=\n"),
    ]);
    let options = LoadOptions::new()
        .with_path(dir.path().join(".env"))
        .with_example(dir.path().join(".env.example"))
        .without_defaults()
        .with_safe(true)
        .with_export(true);

    let error = envsafe::config(&options).unwrap_err();

    assert_eq!(
        error.missing_keys(),
        Some(&["ENVSAFE_PRECEDENCE_REQUIRED".to_string()][..])
    );
    assert!(env::var("ENVSAFE_PRECEDENCE_UNEXPORTED").is_err());
}

#[test]
fn test_assert_safe_uses_process_environment() {
    let _lock = env_lock();
    let mut guard = EnvGuard::new();
    guard.set("ENVSAFE_PRECEDENCE_FROM_ENV", "set");

    let example: DotenvConfig = [("ENVSAFE_PRECEDENCE_FROM_ENV", "")].into_iter().collect();
    assert!(envsafe::assert_safe(&DotenvConfig::new(), &example, false).is_ok());
}

#[test]
fn test_update_function_writes_primary_file() {
    let _lock = env_lock();
    let mut guard = EnvGuard::new();
    guard.remove("ENVSAFE_PRECEDENCE_UPDATED");

    let dir = fixture_dir(&[(".env", "ENVSAFE_PRECEDENCE_UPDATED=old\n")]);
    let options = LoadOptions::new()
        .with_path(dir.path().join(".env"))
        .without_defaults()
        .with_export(true);
    let patch: DotenvConfig = [("ENVSAFE_PRECEDENCE_UPDATED", "new")].into_iter().collect();

    envsafe::update(&patch, &options).unwrap();

    assert_eq!(env::var("ENVSAFE_PRECEDENCE_UPDATED").as_deref(), Ok("new"));
}

#[test]
fn test_load_without_files_in_working_directory() {
    let _lock = env_lock();
    // The crate root carries no dotenv files, so nothing is read or exported.
    let config = envsafe::load().unwrap();
    assert!(config.is_empty());
}
