// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local file system adapter.
//!
//! This module provides a [`FileStore`] backed by `std::fs`.

use crate::domain::{EnvError, Result};
use crate::ports::FileStore;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Maximum allowed size for dotenv files (10 MiB).
pub const MAX_DOTENV_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File store reading and writing the local file system.
///
/// # Examples
///
/// ```rust,no_run
/// use envsafe::adapters::LocalFileStore;
/// use envsafe::ports::FileStore;
/// use std::path::Path;
///
/// let store = LocalFileStore::new();
/// match store.read(Path::new(".env")).unwrap() {
///     Some(contents) => println!("{contents}"),
///     None => println!("no .env file"),
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    /// Creates a new local file store.
    pub fn new() -> Self {
        LocalFileStore
    }
}

impl FileStore for LocalFileStore {
    fn name(&self) -> &str {
        "local-fs"
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        // Size is checked before reading.
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(read_error(path, e)),
        };
        check_size(path, metadata.len())?;

        match fs::read(path) {
            Ok(bytes) => decode_contents(path, bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(read_error(path, e)),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|e| EnvError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

pub(crate) fn read_error(path: &Path, source: std::io::Error) -> EnvError {
    EnvError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}

pub(crate) fn check_size(path: &Path, size: u64) -> Result<()> {
    if size > MAX_DOTENV_FILE_SIZE {
        return Err(EnvError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_DOTENV_FILE_SIZE,
        });
    }
    Ok(())
}

pub(crate) fn decode_contents(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| EnvError::InvalidUtf8 {
        path: path.to_path_buf(),
        source: e,
    })
}
