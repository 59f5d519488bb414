// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader options.
//!
//! [`LoadOptions`] carries every knob the loaders understand. It can be built
//! in code or deserialized with serde using the camelCase option names
//! (`path`, `export`, `safe`, `example`, `allowEmptyValues`, `defaults`).

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Default primary dotenv file.
pub const DEFAULT_PATH: &str = ".env";

/// Default example (required keys) file.
pub const DEFAULT_EXAMPLE_PATH: &str = ".env.example";

/// Default defaults file.
pub const DEFAULT_DEFAULTS_PATH: &str = ".env.defaults";

/// Options for loading and updating dotenv files.
///
/// # Examples
///
/// ```
/// use envsafe::domain::LoadOptions;
///
/// let options = LoadOptions::default()
///     .with_path("config/.env")
///     .with_safe(true)
///     .without_defaults();
///
/// assert!(options.safe);
/// assert!(options.defaults_path().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOptions {
    /// Primary dotenv file.
    pub path: PathBuf,
    /// Export loaded values into the environment (never overriding).
    pub export: bool,
    /// Validate the result against the example file.
    pub safe: bool,
    /// Example file listing required keys.
    pub example: PathBuf,
    /// Let empty values satisfy the safe-mode check.
    pub allow_empty_values: bool,
    /// Defaults file; `None` or an empty path disables defaults.
    pub defaults: Option<PathBuf>,
    /// Set once the caller chose the defaults file; only then does an update
    /// write into it.
    #[serde(skip)]
    defaults_explicit: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            export: false,
            safe: false,
            example: PathBuf::from(DEFAULT_EXAMPLE_PATH),
            allow_empty_values: false,
            defaults: Some(PathBuf::from(DEFAULT_DEFAULTS_PATH)),
            defaults_explicit: false,
        }
    }
}

impl LoadOptions {
    /// Creates options with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary dotenv file.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Enables or disables exporting into the environment.
    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    /// Enables or disables safe mode.
    pub fn with_safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    /// Sets the example file.
    pub fn with_example(mut self, example: impl AsRef<Path>) -> Self {
        self.example = example.as_ref().to_path_buf();
        self
    }

    /// Lets empty values satisfy safe mode.
    pub fn with_allow_empty_values(mut self, allow: bool) -> Self {
        self.allow_empty_values = allow;
        self
    }

    /// Sets the defaults file.
    ///
    /// An explicitly chosen defaults file is also a target for
    /// [`DotenvLoader::update`](crate::service::DotenvLoader::update).
    pub fn with_defaults(mut self, defaults: impl AsRef<Path>) -> Self {
        self.defaults = Some(defaults.as_ref().to_path_buf());
        self.defaults_explicit = true;
        self
    }

    /// Disables the defaults file.
    pub fn without_defaults(mut self) -> Self {
        self.defaults = None;
        self.defaults_explicit = true;
        self
    }

    /// Returns the defaults file if one is configured.
    pub fn defaults_path(&self) -> Option<&Path> {
        self.defaults
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Returns the defaults file only if the caller chose it.
    ///
    /// The built-in `.env.defaults` is read by loads but never written by
    /// updates.
    ///
    /// # Examples
    ///
    /// ```
    /// use envsafe::domain::LoadOptions;
    /// use std::path::Path;
    ///
    /// assert!(LoadOptions::default().explicit_defaults_path().is_none());
    /// let options = LoadOptions::default().with_defaults(".env.defaults");
    /// assert_eq!(options.explicit_defaults_path(), Some(Path::new(".env.defaults")));
    /// ```
    pub fn explicit_defaults_path(&self) -> Option<&Path> {
        if self.defaults_explicit {
            self.defaults_path()
        } else {
            None
        }
    }

    /// Parses options from a YAML document.
    ///
    /// Missing fields keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use envsafe::domain::LoadOptions;
    ///
    /// let options = LoadOptions::from_yaml_str("safe: true\nallowEmptyValues: true\ndefaults: ''\n").unwrap();
    /// assert!(options.safe);
    /// assert!(options.allow_empty_values);
    /// assert!(options.defaults_path().is_none());
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> crate::domain::Result<Self> {
        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| crate::domain::EnvError::OptionsParse {
            message: format!("Invalid YAML options: {}", e),
            source: Some(Box::new(e)),
        })
    }

    /// Reads and parses options from a YAML file.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file(path: impl AsRef<Path>) -> crate::domain::Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| crate::domain::EnvError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::from_yaml_str(&content)
    }
}

/// Wire form of [`LoadOptions`]; an absent `defaults` keeps the built-in
/// file, a present one (including `null` or `""`) is an explicit choice.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct RawLoadOptions {
    path: PathBuf,
    export: bool,
    safe: bool,
    example: PathBuf,
    allow_empty_values: bool,
    #[serde(deserialize_with = "deserialize_defaults")]
    defaults: Option<Option<PathBuf>>,
}

impl Default for RawLoadOptions {
    fn default() -> Self {
        let options = LoadOptions::default();
        Self {
            path: options.path,
            export: options.export,
            safe: options.safe,
            example: options.example,
            allow_empty_values: options.allow_empty_values,
            defaults: None,
        }
    }
}

impl From<RawLoadOptions> for LoadOptions {
    fn from(raw: RawLoadOptions) -> Self {
        let options = LoadOptions {
            path: raw.path,
            export: raw.export,
            safe: raw.safe,
            example: raw.example,
            allow_empty_values: raw.allow_empty_values,
            ..LoadOptions::default()
        };
        match raw.defaults {
            None => options,
            Some(Some(path)) => options.with_defaults(path),
            Some(None) => options.without_defaults(),
        }
    }
}

impl<'de> Deserialize<'de> for LoadOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RawLoadOptions::deserialize(deserializer).map(LoadOptions::from)
    }
}

fn deserialize_defaults<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<PathBuf>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<PathBuf> = Option::deserialize(deserializer)?;
    Ok(Some(value.filter(|path| !path.as_os_str().is_empty())))
}
