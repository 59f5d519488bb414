// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the dotenv loaders.
//!
//! The loaders orchestrate the domain functions over a file store and an
//! environment: read, merge defaults, validate, export, and write back updates.

#[cfg(feature = "async")]
pub mod async_loader;
pub mod dotenv_loader;
pub(crate) mod steps;

// Re-export commonly used types
#[cfg(feature = "async")]
pub use async_loader::AsyncDotenvLoader;
pub use dotenv_loader::{DotenvLoader, DotenvLoaderBuilder};
