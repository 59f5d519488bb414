// SPDX-License-Identifier: MIT OR Apache-2.0

//! Safe-mode validation.
//!
//! Every key of the example file must be available either from the loaded
//! config or from the environment. Loaded values win over the environment for
//! the same key, and unless empty values are allowed a key mapped to the empty
//! string does not count as available.

use crate::domain::dotenv_config::DotenvConfig;
use crate::domain::errors::{EnvError, Result};
use crate::ports::Environment;
use std::collections::{HashMap, HashSet};

/// Returns the example keys that are not available, in example order.
///
/// `ambient` is a snapshot of the environment the config will run in.
///
/// # Examples
///
/// ```
/// use envsafe::domain::safety::missing_keys;
/// use envsafe::domain::DotenvConfig;
/// use std::collections::HashMap;
///
/// let config: DotenvConfig = [("GREETING", "hello"), ("EMPTY", "")].into_iter().collect();
/// let example: DotenvConfig = [("GREETING", ""), ("EMPTY", ""), ("PORT", "")].into_iter().collect();
/// let mut ambient = HashMap::new();
/// ambient.insert("PORT".to_string(), "8080".to_string());
///
/// assert_eq!(missing_keys(&config, &example, false, &ambient), vec!["EMPTY"]);
/// assert!(missing_keys(&config, &example, true, &ambient).is_empty());
/// ```
pub fn missing_keys(
    config: &DotenvConfig,
    example: &DotenvConfig,
    allow_empty_values: bool,
    ambient: &HashMap<String, String>,
) -> Vec<String> {
    let mut available: HashMap<&str, &str> = ambient
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    available.extend(config.iter());

    if !allow_empty_values {
        compact(&mut available);
    }

    difference(example.keys(), &available)
}

/// Fails with [`EnvError::MissingRequiredKeys`] unless every example key is
/// available from `config` or `env`.
pub fn assert_safe_with<E: Environment + ?Sized>(
    env: &E,
    config: &DotenvConfig,
    example: &DotenvConfig,
    allow_empty_values: bool,
) -> Result<()> {
    let missing = missing_keys(config, example, allow_empty_values, &env.snapshot());

    if missing.is_empty() {
        tracing::debug!(
            "Safe mode satisfied: {} required keys available (env={})",
            example.len(),
            env.name()
        );
        return Ok(());
    }

    tracing::warn!("Missing required keys: {}", missing.join(", "));
    Err(EnvError::MissingRequiredKeys {
        missing,
        allow_empty_values,
    })
}

// Only the empty string counts as empty.
fn compact(available: &mut HashMap<&str, &str>) {
    available.retain(|_, value| !value.is_empty());
}

fn difference<'a>(
    required: impl Iterator<Item = &'a str>,
    available: &HashMap<&str, &str>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    required
        .filter(|key| !available.contains_key(key) && seen.insert(*key))
        .map(str::to_string)
        .collect()
}
