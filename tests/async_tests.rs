// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the asynchronous loader.

#![cfg(feature = "async")]

mod common;

use common::{fixture_dir, read_fixture};
use envsafe::prelude::*;
use tempfile::TempDir;

fn options_in(dir: &TempDir) -> LoadOptions {
    LoadOptions::new()
        .with_path(dir.path().join(".env"))
        .with_defaults(dir.path().join(".env.defaults"))
        .with_example(dir.path().join(".env.example"))
}

fn loader() -> AsyncDotenvLoader<TokioFileStore, MemoryEnvironment> {
    AsyncDotenvLoader::with_parts(TokioFileStore::new(), MemoryEnvironment::new())
}

#[tokio::test]
async fn test_async_matches_sync_loader() {
    let dir = fixture_dir(&[
        (".env", common::DOTENV_TEST),
        (".env.defaults", "DEFAULT1=Some Default\nBASIC=ignored\n"),
    ]);
    let options = options_in(&dir);

    let from_async = loader().load(&options).await.unwrap();
    let from_sync = DotenvLoader::builder()
        .with_memory_environment()
        .build()
        .load(&options)
        .unwrap();

    assert_eq!(from_async, from_sync);
    assert_eq!(from_async.get("BASIC"), Some("basic"));
}

#[tokio::test]
async fn test_async_missing_files() {
    let dir = fixture_dir(&[]);
    let config = loader()
        .load(&options_in(&dir).with_safe(true))
        .await
        .unwrap();
    assert!(config.is_empty());
}

#[tokio::test]
async fn test_async_safe_mode_and_export() {
    let dir = fixture_dir(&[
        (".env", "GREETING=hello world\n"),
        (".env.example", "GREETING=\nANOTHER=\n"),
    ]);
    let options = options_in(&dir).with_safe(true).with_export(true);

    let mut failing = loader();
    assert!(failing.load(&options).await.is_err());
    assert!(failing.environment().vars().is_empty());

    let mut passing = AsyncDotenvLoader::with_parts(
        TokioFileStore::new(),
        MemoryEnvironment::from_pairs([("ANOTHER", "VAR")]),
    );
    passing.load(&options).await.unwrap();
    assert_eq!(
        passing.into_environment().get("GREETING").as_deref(),
        Some("hello world")
    );
}

#[tokio::test]
async fn test_async_update_defaults_file() {
    let dir = fixture_dir(&[
        (".env", "GREETING=hello world\n"),
        (".env.defaults", "DEFAULT1=Some Default\n"),
    ]);
    let patch: DotenvConfig = [("DEFAULT1", "Default Some")].into_iter().collect();

    let config = loader().update(&patch, &options_in(&dir)).await.unwrap();

    assert_eq!(config.get("DEFAULT1"), Some("Default Some"));
    assert_eq!(read_fixture(&dir, ".env"), "GREETING=hello world\n");
    assert_eq!(read_fixture(&dir, ".env.defaults"), "DEFAULT1=Default Some\n");
}
