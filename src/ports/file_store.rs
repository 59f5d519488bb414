// SPDX-License-Identifier: MIT OR Apache-2.0

//! File store trait definitions.
//!
//! This module defines the `FileStore` trait used by the synchronous loader
//! and, with the `async` feature, the `AsyncFileStore` trait used by the
//! asynchronous loader. Both report a missing file as `Ok(None)` instead of an
//! error.

use crate::domain::Result;
use std::path::Path;

/// A trait for reading and writing dotenv files.
///
/// # Examples
///
/// ```rust
/// use envsafe::domain::Result;
/// use envsafe::ports::FileStore;
/// use std::path::Path;
///
/// struct FixedStore;
///
/// impl FileStore for FixedStore {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn read(&self, path: &Path) -> Result<Option<String>> {
///         if path == Path::new(".env") {
///             Ok(Some("GREETING=hello world\n".to_string()))
///         } else {
///             Ok(None)
///         }
///     }
///
///     fn write(&self, _path: &Path, _contents: &str) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let store = FixedStore;
/// assert!(store.read(Path::new(".env")).unwrap().is_some());
/// assert!(store.read(Path::new(".env.example")).unwrap().is_none());
/// ```
pub trait FileStore: Send + Sync {
    /// Returns the name of this store, used for logging.
    fn name(&self) -> &str;

    /// Reads a file as UTF-8 text.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(contents))` - The file was read
    /// * `Ok(None)` - The file does not exist
    /// * `Err(EnvError)` - Any other failure
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Replaces the contents of a file.
    ///
    /// A "not found" failure (e.g. a missing parent directory) is reported as
    /// [`EnvError::FileWrite`](crate::domain::EnvError::FileWrite); the loaders
    /// decide how to treat it.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Asynchronous counterpart of [`FileStore`].
#[cfg(feature = "async")]
pub trait AsyncFileStore: Send + Sync {
    /// Returns the name of this store, used for logging.
    fn name(&self) -> &str;

    /// Reads a file as UTF-8 text; `Ok(None)` if it does not exist.
    fn read(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;

    /// Replaces the contents of a file.
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
