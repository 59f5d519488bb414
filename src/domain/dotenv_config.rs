// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed dotenv mapping.
//!
//! This module provides [`DotenvConfig`], an insertion-ordered map from keys to
//! decoded values. Order follows the source document so that writing a config
//! back keeps the file layout familiar, but it carries no meaning: two configs
//! with the same entries compare equal regardless of order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// An ordered mapping of dotenv keys to decoded values.
///
/// Keys are unique. Inserting an existing key replaces its value in place, so
/// the last occurrence of a key in a document wins while the key keeps the
/// position of its first occurrence.
///
/// # Examples
///
/// ```
/// use envsafe::domain::DotenvConfig;
///
/// let mut config = DotenvConfig::new();
/// config.insert("GREETING", "hello");
/// config.insert("GREETING", "hello world");
///
/// assert_eq!(config.get("GREETING"), Some("hello world"));
/// assert_eq!(config.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DotenvConfig {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl DotenvConfig {
    /// Creates an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the config has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Inserts a value, returning the previous one if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Copies every entry of `defaults` whose key is absent from `self`.
    ///
    /// Existing keys are never overridden. Returns the number of keys copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use envsafe::domain::DotenvConfig;
    ///
    /// let mut config: DotenvConfig = [("GREETING", "hello")].into_iter().collect();
    /// let defaults: DotenvConfig = [("GREETING", "hi"), ("DEFAULT1", "Some Default")]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(config.merge_missing(&defaults), 1);
    /// assert_eq!(config.get("GREETING"), Some("hello"));
    /// assert_eq!(config.get("DEFAULT1"), Some("Some Default"));
    /// ```
    pub fn merge_missing(&mut self, defaults: &DotenvConfig) -> usize {
        let mut copied = 0;
        for (key, value) in defaults.iter() {
            if !self.contains_key(key) {
                self.insert(key, value);
                copied += 1;
            }
        }
        copied
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Copies the entries into an unordered `HashMap`.
    pub fn to_hash_map(&self) -> HashMap<String, String> {
        self.entries.iter().cloned().collect()
    }
}

impl PartialEq for DotenvConfig {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for DotenvConfig {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DotenvConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = DotenvConfig::new();
        config.extend(iter);
        config
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for DotenvConfig {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl From<HashMap<String, String>> for DotenvConfig {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for DotenvConfig {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for DotenvConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DotenvConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = DotenvConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of string keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut config = DotenvConfig::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    config.insert(key, value);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}
