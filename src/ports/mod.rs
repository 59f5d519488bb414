// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the collaborators
//! the loaders depend on: the file system and the environment. These traits
//! are implemented by adapters in the adapters layer.

pub mod environment;
pub mod file_store;

// Re-export commonly used types
pub use environment::Environment;
#[cfg(feature = "async")]
pub use file_store::AsyncFileStore;
pub use file_store::FileStore;
