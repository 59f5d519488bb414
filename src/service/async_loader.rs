// SPDX-License-Identifier: MIT OR Apache-2.0

//! Asynchronous dotenv loader.
//!
//! [`AsyncDotenvLoader`] runs the same pipeline as
//! [`DotenvLoader`](crate::service::DotenvLoader), awaiting each file read in
//! turn. Parsing, validation and export are synchronous.

use crate::adapters::{ProcessEnvironment, TokioFileStore};
use crate::domain::{assert_safe_with, stringify, DotenvConfig, LoadOptions, Result};
use crate::ports::{AsyncFileStore, Environment};
use crate::service::steps;
use std::path::Path;

/// Loads dotenv files through an [`AsyncFileStore`].
///
/// # Examples
///
/// ```rust,no_run
/// use envsafe::domain::LoadOptions;
/// use envsafe::service::AsyncDotenvLoader;
///
/// # async fn run() -> envsafe::domain::Result<()> {
/// let mut loader = AsyncDotenvLoader::new();
/// let config = loader.load(&LoadOptions::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AsyncDotenvLoader<F = TokioFileStore, E = ProcessEnvironment> {
    files: F,
    env: E,
}

impl AsyncDotenvLoader {
    /// Creates a loader over `tokio::fs` and the process environment.
    pub fn new() -> Self {
        Self::with_parts(TokioFileStore::new(), ProcessEnvironment::new())
    }
}

impl Default for AsyncDotenvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: AsyncFileStore, E: Environment> AsyncDotenvLoader<F, E> {
    /// Creates a loader from explicit collaborators.
    pub fn with_parts(files: F, env: E) -> Self {
        Self { files, env }
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
    pub async fn read_config(&self, path: &Path) -> Result<DotenvConfig> {
        let contents = self.files.read(path).await?;
        Ok(steps::config_from_contents(path, contents))
    }

    /// Async version of [`DotenvLoader::load`](crate::service::DotenvLoader::load).
    pub async fn load(&mut self, options: &LoadOptions) -> Result<DotenvConfig> {
        let mut config = self.read_config(&options.path).await?;

        if let Some(defaults_path) = options.defaults_path() {
            let defaults = self.read_config(defaults_path).await?;
            steps::merge_defaults(&mut config, &defaults, defaults_path);
        }

        if options.safe {
            let example = self.read_config(&options.example).await?;
            assert_safe_with(&self.env, &config, &example, options.allow_empty_values)?;
        }

        if options.export {
            steps::export(&mut self.env, &config);
        }

        Ok(config)
    }

    /// Async version of [`DotenvLoader::update`](crate::service::DotenvLoader::update).
    pub async fn update(
        &mut self,
        patch: &DotenvConfig,
        options: &LoadOptions,
    ) -> Result<DotenvConfig> {
        let mut primary = self.read_config(&options.path).await?;
        let mut defaults = match options.explicit_defaults_path() {
            Some(path) => Some((path, self.read_config(path).await?)),
            None => None,
        };

        let report = steps::apply_patch(
            patch,
            &mut primary,
            defaults.as_mut().map(|(_, config)| config),
        );

        if report.primary > 0 {
            self.write_config(&options.path, &primary).await?;
        }
        if report.defaults > 0 {
            if let Some((path, config)) = &defaults {
                self.write_config(path, config).await?;
            }
        }

        self.load(options).await
    }

    async fn write_config(&self, path: &Path, config: &DotenvConfig) -> Result<()> {
        let result = self.files.write(path, &stringify(config)).await;
        steps::tolerate_missing_target(result, path)
    }
}
