// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the dotenv format and validation logic.
//!
//! This module is independent of files and of the process environment except
//! through the [`Environment`](crate::ports::Environment) port used by the
//! safe-mode check.

pub mod document;
pub mod dotenv_config;
pub mod errors;
pub mod line;
pub mod options;
pub mod safety;
pub mod value;

// Re-export commonly used types
pub use document::{parse, stringify};
pub use dotenv_config::DotenvConfig;
pub use errors::{EnvError, Result};
pub use options::LoadOptions;
pub use safety::{assert_safe_with, missing_keys};
