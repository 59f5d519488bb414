// SPDX-License-Identifier: MIT OR Apache-2.0

//! Asynchronous file system adapter.
//!
//! This module provides an [`AsyncFileStore`] backed by `tokio::fs`, for
//! applications that must not block their runtime on file I/O.

use crate::adapters::local_fs::{check_size, decode_contents, read_error};
use crate::domain::{EnvError, Result};
use crate::ports::AsyncFileStore;
use std::io::ErrorKind;
use std::path::Path;

/// Async file store using `tokio::fs`.
///
/// Applies the same size limit and UTF-8 checks as
/// [`LocalFileStore`](crate::adapters::LocalFileStore).
///
/// # Examples
///
/// ```rust,no_run
/// use envsafe::adapters::TokioFileStore;
/// use envsafe::ports::AsyncFileStore;
/// use std::path::Path;
///
/// # async fn run() -> envsafe::domain::Result<()> {
/// let store = TokioFileStore::new();
/// let contents = store.read(Path::new(".env")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileStore;

impl TokioFileStore {
    /// Creates a new tokio file store.
    pub fn new() -> Self {
        TokioFileStore
    }
}

impl AsyncFileStore for TokioFileStore {
    fn name(&self) -> &str {
        "tokio-fs"
    }

    async fn read(&self, path: &Path) -> Result<Option<String>> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(read_error(path, e)),
        };
        check_size(path, metadata.len())?;

        match tokio::fs::read(path).await {
            Ok(bytes) => decode_contents(path, bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(read_error(path, e)),
        }
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| EnvError::FileWrite {
                path: path.to_path_buf(),
                source: e,
            })
    }
}
