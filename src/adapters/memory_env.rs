// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment adapter.
//!
//! Loaders driven by a [`MemoryEnvironment`] never touch the process
//! environment, which makes them deterministic and safe to use from tests or
//! from code that only wants the resolved values.

use crate::ports::Environment;
use std::collections::{BTreeMap, HashMap};

/// Environment adapter backed by an in-memory map.
///
/// # Examples
///
/// ```rust
/// use envsafe::adapters::MemoryEnvironment;
/// use envsafe::ports::Environment;
///
/// let mut env = MemoryEnvironment::from_pairs([("DO_NOT_OVERRIDE", "Hello there")]);
/// env.set("GREETING", "hello world");
///
/// assert_eq!(env.get("DO_NOT_OVERRIDE").as_deref(), Some("Hello there"));
/// assert_eq!(env.vars().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnvironment {
    vars: BTreeMap<String, String>,
}

impl MemoryEnvironment {
    /// Creates an empty in-memory environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from an existing map.
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Creates an environment from key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the variables currently defined.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Consumes the environment and returns its variables.
    pub fn into_vars(self) -> BTreeMap<String, String> {
        self.vars
    }
}

impl Environment for MemoryEnvironment {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_owned(), value.to_owned());
    }

    fn snapshot(&self) -> HashMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
