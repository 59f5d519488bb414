// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default dotenv loader implementation.
//!
//! This module provides [`DotenvLoader`], which reads the primary, defaults and
//! example files through a [`FileStore`], validates and exports through an
//! [`Environment`], and writes patched values back for updates.

use crate::adapters::{LocalFileStore, MemoryEnvironment, ProcessEnvironment};
use crate::domain::{assert_safe_with, stringify, DotenvConfig, LoadOptions, Result};
use crate::ports::{Environment, FileStore};
use crate::service::steps;
use std::path::Path;

/// Loads dotenv files according to [`LoadOptions`].
///
/// The loader is generic over its collaborators; [`DotenvLoader::new`] uses
/// the local file system and the process environment.
///
/// # Examples
///
/// ```rust,no_run
/// use envsafe::domain::LoadOptions;
/// use envsafe::service::DotenvLoader;
///
/// # fn main() -> envsafe::domain::Result<()> {
/// let mut loader = DotenvLoader::new();
/// let config = loader.load(&LoadOptions::default().with_safe(true))?;
/// println!("GREETING={:?}", config.get("GREETING"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DotenvLoader<F = LocalFileStore, E = ProcessEnvironment> {
    /// Where dotenv files are read from and written to
    files: F,
    /// Environment used for safe mode and export
    env: E,
}

impl DotenvLoader {
    /// Creates a loader over the local file system and the process environment.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new loader builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envsafe::service::DotenvLoader;
    ///
    /// let loader = DotenvLoader::builder()
    ///     .with_memory_environment()
    ///     .build();
    /// ```
    pub fn builder() -> DotenvLoaderBuilder {
        DotenvLoaderBuilder::new()
    }
}

impl Default for DotenvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileStore, E: Environment> DotenvLoader<F, E> {
    /// Creates a loader from explicit collaborators.
    pub fn with_parts(files: F, env: E) -> Self {
        Self { files, env }
    }

    /// Returns the file store.
    pub fn file_store(&self) -> &F {
        &self.files
    }

    /// Returns the environment.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Consumes the loader and returns its environment.
    pub fn into_environment(self) -> E {
        self.env
    }

    /// Reads and parses one dotenv file; a missing file yields an empty config.
    pub fn read_config(&self, path: &Path) -> Result<DotenvConfig> {
        let contents = self.files.read(path)?;
        Ok(steps::config_from_contents(path, contents))
    }

    /// Loads the primary file, merges defaults, validates and exports.
    ///
    /// Steps run in order: primary file, defaults merge, safe-mode check
    /// against the example file, export. Missing files are empty; the first
    /// failing step aborts the load, so nothing is exported when the safe-mode
    /// check fails.
    pub fn load(&mut self, options: &LoadOptions) -> Result<DotenvConfig> {
        let mut config = self.read_config(&options.path)?;

        if let Some(defaults_path) = options.defaults_path() {
            let defaults = self.read_config(defaults_path)?;
            steps::merge_defaults(&mut config, &defaults, defaults_path);
        }

        if options.safe {
            let example = self.read_config(&options.example)?;
            assert_safe_with(&self.env, &config, &example, options.allow_empty_values)?;
        }

        if options.export {
            steps::export(&mut self.env, &config);
        }

        Ok(config)
    }

    /// Writes `patch` into the dotenv files, then loads with `options`.
    ///
    /// Only keys that already exist are written: keys of the primary file go
    /// there, keys found only in the defaults file go to the defaults file when
    /// the caller chose it with [`LoadOptions::with_defaults`], anything else
    /// is ignored. The built-in `.env.defaults` is never written. A file is rewritten only
    /// if it received a change; rewriting drops comments and blank lines.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use envsafe::domain::{DotenvConfig, LoadOptions};
    /// use envsafe::service::DotenvLoader;
    ///
    /// # fn main() -> envsafe::domain::Result<()> {
    /// let patch: DotenvConfig = [("GREETING", "world hello")].into_iter().collect();
    /// let config = DotenvLoader::new().update(&patch, &LoadOptions::default())?;
    /// assert_eq!(config.get("GREETING"), Some("world hello"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn update(&mut self, patch: &DotenvConfig, options: &LoadOptions) -> Result<DotenvConfig> {
        let mut primary = self.read_config(&options.path)?;
        let mut defaults = match options.explicit_defaults_path() {
            Some(path) => Some((path, self.read_config(path)?)),
            None => None,
        };

        let report = steps::apply_patch(
            patch,
            &mut primary,
            defaults.as_mut().map(|(_, config)| config),
        );
        tracing::debug!(
            "Update touches {} primary keys, {} default keys, ignores {}",
            report.primary,
            report.defaults,
            report.ignored
        );

        if report.primary > 0 {
            self.write_config(&options.path, &primary)?;
        }
        if report.defaults > 0 {
            if let Some((path, config)) = &defaults {
                self.write_config(path, config)?;
            }
        }

        self.load(options)
    }

    fn write_config(&self, path: &Path, config: &DotenvConfig) -> Result<()> {
        let result = self.files.write(path, &stringify(config));
        steps::tolerate_missing_target(result, path)?;
        tracing::debug!(
            "Wrote {} keys to '{}' ({})",
            config.len(),
            path.display(),
            self.files.name()
        );
        Ok(())
    }
}

/// Builder for constructing a [`DotenvLoader`].
///
/// # Examples
///
/// ```rust
/// use envsafe::adapters::{LocalFileStore, MemoryEnvironment};
/// use envsafe::service::DotenvLoaderBuilder;
///
/// let loader = DotenvLoaderBuilder::new()
///     .with_file_store(LocalFileStore::new())
///     .with_environment(MemoryEnvironment::from_pairs([("PORT", "8080")]))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct DotenvLoaderBuilder<F = LocalFileStore, E = ProcessEnvironment> {
    files: F,
    env: E,
}

impl DotenvLoaderBuilder {
    /// Creates a builder with the local file system and process environment.
    pub fn new() -> Self {
        Self {
            files: LocalFileStore::new(),
            env: ProcessEnvironment::new(),
        }
    }
}

impl Default for DotenvLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileStore, E: Environment> DotenvLoaderBuilder<F, E> {
    /// Replaces the file store.
    pub fn with_file_store<G: FileStore>(self, files: G) -> DotenvLoaderBuilder<G, E> {
        DotenvLoaderBuilder {
            files,
            env: self.env,
        }
    }

    /// Replaces the environment.
    pub fn with_environment<V: Environment>(self, env: V) -> DotenvLoaderBuilder<F, V> {
        DotenvLoaderBuilder {
            files: self.files,
            env,
        }
    }

    /// Uses an empty in-memory environment, leaving the process untouched.
    pub fn with_memory_environment(self) -> DotenvLoaderBuilder<F, MemoryEnvironment> {
        self.with_environment(MemoryEnvironment::new())
    }

    /// Builds the loader.
    pub fn build(self) -> DotenvLoader<F, E> {
        DotenvLoader::with_parts(self.files, self.env)
    }
}
