// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline steps shared by the synchronous and asynchronous loaders.
//!
//! The loaders only differ in how they reach the file system; everything that
//! happens between reads is implemented once here.

use crate::domain::{parse, DotenvConfig, EnvError, Result};
use crate::ports::Environment;
use std::path::Path;

/// Turns the result of a file read into a config; a missing file is empty.
pub(crate) fn config_from_contents(path: &Path, contents: Option<String>) -> DotenvConfig {
    match contents {
        Some(text) => {
            let config = parse(&text);
            tracing::debug!("Parsed {} keys from '{}'", config.len(), path.display());
            config
        }
        None => {
            tracing::debug!("Dotenv file '{}' not found, using empty config", path.display());
            DotenvConfig::new()
        }
    }
}

/// Fills keys missing from `config` with values from `defaults`.
pub(crate) fn merge_defaults(config: &mut DotenvConfig, defaults: &DotenvConfig, path: &Path) {
    let copied = config.merge_missing(defaults);
    tracing::debug!(
        "Merged {} of {} default keys from '{}'",
        copied,
        defaults.len(),
        path.display()
    );
}

/// Counts of an export pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ExportReport {
    pub(crate) exported: usize,
    pub(crate) skipped_existing: usize,
}

/// Sets every key of `config` that `env` does not define yet.
pub(crate) fn export<E: Environment + ?Sized>(env: &mut E, config: &DotenvConfig) -> ExportReport {
    let mut report = ExportReport::default();
    for (key, value) in config.iter() {
        if env.contains(key) {
            tracing::trace!("Not exporting '{}': already set", key);
            report.skipped_existing += 1;
            continue;
        }
        env.set(key, value);
        report.exported += 1;
    }

    tracing::debug!(
        "Exported {} keys to {} environment ({} already set)",
        report.exported,
        env.name(),
        report.skipped_existing
    );
    report
}

/// Where each patched key ended up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PatchReport {
    pub(crate) primary: usize,
    pub(crate) defaults: usize,
    pub(crate) ignored: usize,
}

/// Applies `patch` to the files' configs without creating keys.
///
/// A key goes to the primary config when it exists there, otherwise to the
/// defaults config when that exists and holds the key. Anything else is
/// ignored.
pub(crate) fn apply_patch(
    patch: &DotenvConfig,
    primary: &mut DotenvConfig,
    mut defaults: Option<&mut DotenvConfig>,
) -> PatchReport {
    let mut report = PatchReport::default();

    for (key, value) in patch.iter() {
        if primary.contains_key(key) {
            primary.insert(key, value);
            report.primary += 1;
            continue;
        }
        match defaults.as_deref_mut() {
            Some(defaults) if defaults.contains_key(key) => {
                defaults.insert(key, value);
                report.defaults += 1;
            }
            _ => {
                tracing::debug!("Not updating '{}': key exists in no dotenv file", key);
                report.ignored += 1;
            }
        }
    }
    report
}

/// Treats a write that failed with "not found" as a no-op.
pub(crate) fn tolerate_missing_target(result: Result<()>, path: &Path) -> Result<()> {
    match result {
        Err(e @ EnvError::FileWrite { .. }) if e.is_not_found() => {
            tracing::debug!("Skipping write to '{}': {}", path.display(), e);
            Ok(())
        }
        other => other,
    }
}
