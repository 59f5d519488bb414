// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the dotenv crate.
//!
//! Parsing and serialization never fail; only file I/O, option documents and
//! the safe-mode check produce errors. All errors use `thiserror` for proper
//! error handling and conversion.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The main error type for dotenv operations.
///
/// A missing dotenv file is never reported through this type: loaders treat it
/// as an empty configuration. It is marked as `#[non_exhaustive]` to allow for
/// future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use envsafe::domain::errors::EnvError;
///
/// let error = EnvError::MissingRequiredKeys {
///     missing: vec!["DATABASE_URL".to_string()],
///     allow_empty_values: false,
/// };
/// assert!(error.is_missing_required_keys());
/// assert!(error.to_string().contains("DATABASE_URL"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// A dotenv file exists but could not be read.
    #[error("Failed to read dotenv file '{}': {source}", .path.display())]
    FileRead {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A dotenv file could not be written.
    #[error("Failed to write dotenv file '{}': {source}", .path.display())]
    FileWrite {
        /// The file that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A dotenv file is larger than the adapter is willing to read.
    #[error(
        "Dotenv file '{}' too large: {size} bytes (max {max} bytes)",
        .path.display()
    )]
    FileTooLarge {
        /// The offending file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        max: u64,
    },

    /// A dotenv file is not valid UTF-8.
    #[error("Dotenv file '{}' is not valid UTF-8: {source}", .path.display())]
    InvalidUtf8 {
        /// The offending file
        path: PathBuf,
        /// The underlying decoding error
        #[source]
        source: FromUtf8Error,
    },

    /// Keys listed in the example file are not available.
    #[error("{}", missing_keys_message(.missing, *.allow_empty_values))]
    MissingRequiredKeys {
        /// Every missing key, in example-file order
        missing: Vec<String>,
        /// Whether empty values were accepted during the check
        allow_empty_values: bool,
    },

    /// An options document could not be parsed.
    #[error("Failed to parse loader options: {message}")]
    OptionsParse {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl EnvError {
    /// Returns the missing keys if this is a [`EnvError::MissingRequiredKeys`].
    pub fn missing_keys(&self) -> Option<&[String]> {
        match self {
            EnvError::MissingRequiredKeys { missing, .. } => Some(missing),
            _ => None,
        }
    }

    /// Returns `true` if this error was raised by the safe-mode check.
    pub fn is_missing_required_keys(&self) -> bool {
        matches!(self, EnvError::MissingRequiredKeys { .. })
    }

    /// Returns `true` if the underlying I/O error is `NotFound`.
    pub fn is_not_found(&self) -> bool {
        match self {
            EnvError::FileRead { source, .. } | EnvError::FileWrite { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

fn missing_keys_message(missing: &[String], allow_empty_values: bool) -> String {
    let mut message = format!(
        "The following variables were defined in the example file but are not present in the environment:\n  {}\n\nMake sure to add them to your env file.",
        missing.join(", ")
    );
    if !allow_empty_values {
        message.push_str(
            "\n\nIf you expect any of these variables to be empty, you can enable the allow_empty_values option.",
        );
    }
    message
}

/// A specialized Result type for dotenv operations.
pub type Result<T> = std::result::Result<T, EnvError>;
