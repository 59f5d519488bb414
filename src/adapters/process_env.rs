// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment adapter.
//!
//! This module provides an adapter that reads and writes the real environment
//! of the current process.

use crate::ports::Environment;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;

/// Serializes this crate's own accesses to the process environment.
static PROCESS_ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Environment adapter for the current process.
///
/// Reads go through [`std::env::var_os`]; non-UTF-8 values are converted
/// lossily. Writes go through [`std::env::set_var`] and skip variables the
/// platform cannot store (empty keys, keys containing `=`, NUL bytes).
///
/// The process environment is global: code outside this crate that mutates
/// it concurrently is not covered by the adapter's internal lock.
///
/// # Examples
///
/// ```rust
/// use envsafe::adapters::ProcessEnvironment;
/// use envsafe::ports::Environment;
///
/// let env = ProcessEnvironment::new();
/// assert_eq!(env.name(), "process");
/// assert!(env.get("ENVSAFE_SURELY_UNDEFINED_VARIABLE").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Creates a new process environment adapter.
    pub fn new() -> Self {
        ProcessEnvironment
    }
}

impl Environment for ProcessEnvironment {
    fn name(&self) -> &str {
        "process"
    }

    fn get(&self, key: &str) -> Option<String> {
        if !is_storable_key(key) {
            return None;
        }
        let _guard = PROCESS_ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        if !is_storable_key(key) || value.contains('\0') {
            tracing::warn!("Skipping environment variable the OS cannot store: {:?}", key);
            return;
        }
        let _guard = PROCESS_ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var(key, value);
    }

    fn snapshot(&self) -> HashMap<String, String> {
        let _guard = PROCESS_ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let vars: HashMap<String, String> = env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect();

        tracing::trace!("Snapshot of {} process environment variables", vars.len());
        vars
    }
}

fn is_storable_key(key: &str) -> bool {
    !key.is_empty() && !key.contains('=') && !key.contains('\0')
}
