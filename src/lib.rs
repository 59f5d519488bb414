// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture `.env` file crate.
//!
//! This crate parses and writes `.env` files, fills missing keys from a
//! defaults file, validates the result against an example file listing the
//! required keys ("safe mode"), and optionally exports the values into the
//! process environment without overwriting anything already set.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The dotenv format, `DotenvConfig`, options, validation and errors
//! - **Ports**: Trait definitions for collaborators (`FileStore`, `Environment`)
//! - **Adapters**: Implementations for the local file system and environments
//! - **Service**: The loaders that orchestrate everything
//!
//! # Feature Flags
//!
//! - `yaml`: Load [`LoadOptions`](domain::LoadOptions) from YAML (default)
//! - `cli`: Build the `envsafe` command line tool (default)
//! - `async`: Enable `AsyncDotenvLoader` on top of `tokio::fs`
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envsafe::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! // Reads .env and .env.defaults, checks .env.example, then exports.
//! let options = LoadOptions::default().with_safe(true).with_export(true);
//! let config = envsafe::config(&options)?;
//!
//! for (key, value) in config.iter() {
//!     println!("{key}={value}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Parsing and Serializing
//!
//! ```rust
//! let config = envsafe::parse("# comment\nGREETING=hello world\nQUOTED='  a  '\n");
//! assert_eq!(config.get("GREETING"), Some("hello world"));
//! assert_eq!(config.get("QUOTED"), Some("  a  "));
//!
//! let text = envsafe::stringify(&config);
//! assert_eq!(envsafe::parse(&text), config);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{parse, stringify};

use adapters::ProcessEnvironment;
use domain::{assert_safe_with, DotenvConfig, LoadOptions, Result};
use service::DotenvLoader;

/// Loads dotenv files from disk according to `options`.
///
/// Uses the local file system and the process environment.
pub fn config(options: &LoadOptions) -> Result<DotenvConfig> {
    DotenvLoader::new().load(options)
}

/// Loads `.env` and `.env.defaults` and exports them into the process
/// environment.
///
/// Equivalent to `config(&LoadOptions::default().with_export(true))`.
pub fn load() -> Result<DotenvConfig> {
    config(&LoadOptions::default().with_export(true))
}

/// Writes `patch` into the existing dotenv files, then loads with `options`.
///
/// See [`DotenvLoader::update`] for which keys are written where.
pub fn update(patch: &DotenvConfig, options: &LoadOptions) -> Result<DotenvConfig> {
    DotenvLoader::new().update(patch, options)
}

/// Checks that every key of `example` is available from `config` or from the
/// process environment.
///
/// # Examples
///
/// ```rust
/// use envsafe::domain::DotenvConfig;
///
/// let config: DotenvConfig = [("GREETING", "hello")].into_iter().collect();
/// let example: DotenvConfig = [("GREETING", "")].into_iter().collect();
/// assert!(envsafe::assert_safe(&config, &example, false).is_ok());
/// ```
pub fn assert_safe(
    config: &DotenvConfig,
    example: &DotenvConfig,
    allow_empty_values: bool,
) -> Result<()> {
    assert_safe_with(&ProcessEnvironment::new(), config, example, allow_empty_values)
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{parse, stringify, DotenvConfig, EnvError, LoadOptions, Result};
    pub use crate::ports::{Environment, FileStore};
    pub use crate::service::{DotenvLoader, DotenvLoaderBuilder};

    pub use crate::adapters::{LocalFileStore, MemoryEnvironment, ProcessEnvironment};

    // Re-export async types based on feature flags
    #[cfg(feature = "async")]
    pub use crate::adapters::TokioFileStore;
    #[cfg(feature = "async")]
    pub use crate::ports::AsyncFileStore;
    #[cfg(feature = "async")]
    pub use crate::service::AsyncDotenvLoader;
}
