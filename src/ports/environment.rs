// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment trait definition.
//!
//! This module defines the `Environment` trait, the port through which the
//! loaders read and write environment variables. The real process environment
//! and in-memory fakes both implement it.

use std::collections::HashMap;

/// A trait for environment variable stores.
///
/// The loaders only ever read variables, take a full snapshot for the
/// safe-mode check, and set variables that are not yet defined.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that loaders can move across
/// threads and be used from async tasks.
///
/// # Examples
///
/// ```rust
/// use envsafe::ports::Environment;
/// use std::collections::HashMap;
///
/// #[derive(Default)]
/// struct MyEnvironment {
///     vars: HashMap<String, String>,
/// }
///
/// impl Environment for MyEnvironment {
///     fn name(&self) -> &str {
///         "my-env"
///     }
///
///     fn get(&self, key: &str) -> Option<String> {
///         self.vars.get(key).cloned()
///     }
///
///     fn set(&mut self, key: &str, value: &str) {
///         self.vars.insert(key.to_string(), value.to_string());
///     }
///
///     fn snapshot(&self) -> HashMap<String, String> {
///         self.vars.clone()
///     }
/// }
///
/// let mut env = MyEnvironment::default();
/// env.set("GREETING", "hello");
/// assert!(env.contains("GREETING"));
/// ```
pub trait Environment: Send + Sync {
    /// Returns the name of this environment.
    ///
    /// This name is used for logging and debugging, e.g. "process" or
    /// "memory".
    fn name(&self) -> &str;

    /// Returns the value of `key`, or `None` if it is not defined.
    ///
    /// A variable defined with an empty value returns `Some("")`.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set(&mut self, key: &str, value: &str);

    /// Returns every variable currently defined.
    fn snapshot(&self) -> HashMap<String, String>;

    /// Returns `true` if `key` is defined, even with an empty value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
