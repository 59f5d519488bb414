// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing file store and environment implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer.

pub mod local_fs;
pub mod memory_env;
pub mod process_env;
#[cfg(feature = "async")]
pub mod tokio_fs;

// Re-export adapters based on feature flags
pub use local_fs::LocalFileStore;
pub use memory_env::MemoryEnvironment;
pub use process_env::ProcessEnvironment;
#[cfg(feature = "async")]
pub use tokio_fs::TokioFileStore;
