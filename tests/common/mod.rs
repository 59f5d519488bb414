// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities shared by the integration tests.

#![allow(dead_code)]

use envsafe::domain::{EnvError, Result};
use envsafe::ports::FileStore;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;

/// The dotenv fixture exercised by the parser tests.
pub const DOTENV_TEST: &str = r#"BASIC=basic

# previous line intentionally left blank
AFTER_EMPTY=empty
# COMMENTED=should not appear
AFTER_COMMENT=comment
EMPTY_VALUE=
QUOTED_SINGLE='single quoted'
QUOTED_DOUBLE="double quoted"
MULTILINE="hello\nworld"
JSON={"foo": "bar"}
WHITESPACE=    whitespace
WHITESPACE_DOUBLE="    whitespace    "
MULTILINE_SINGLE_QUOTE='hello\nworld'
EQUALS=equ==als
VAR_WITH_SPACE =var with space
VAR_WITH_ENDING_WHITESPACE  =value
V4R_W1TH_NUM8ER5=var with numbers
1INVALID=var starting with a number
  INDENTED_VAR=indented var
  INDENTED_VALUE=    indented value
	TAB_INDENTED_VAR=tab indented var
	TAB_INDENTED_VALUE=	tab indented value
"#;

/// Writes each `(name, contents)` pair into a fresh temporary directory.
pub fn fixture_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

/// Reads a file of a fixture directory back.
pub fn read_fixture(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).unwrap()
}

/// An in-memory file store that records how many writes it served.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: Mutex<HashMap<PathBuf, String>>,
    writes: Mutex<usize>,
    fail_writes_with: Option<io::ErrorKind>,
}

impl MemoryFileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file to the store.
    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), contents.to_string());
        self
    }

    /// Makes every write fail with the given error kind.
    pub fn failing_writes(mut self, kind: io::ErrorKind) -> Self {
        self.fail_writes_with = Some(kind);
        self
    }

    /// Returns the current contents of a file.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// Returns the number of successful writes.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl FileStore for MemoryFileStore {
    fn name(&self) -> &str {
        "memory-fs"
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.lock().unwrap().get(path).cloned())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(kind) = self.fail_writes_with {
            return Err(EnvError::FileWrite {
                path: path.to_path_buf(),
                source: io::Error::new(kind, "simulated write failure"),
            });
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serializes tests that touch the real process environment.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

/// Sets or removes process variables and restores them when dropped.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Creates a guard with nothing to restore.
    pub fn new() -> Self {
        EnvGuard { saved: Vec::new() }
    }

    /// Sets a variable, remembering its previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.remember(key);
        env::set_var(key, value);
    }

    /// Removes a variable, remembering its previous value.
    pub fn remove(&mut self, key: &str) {
        self.remember(key);
        env::remove_var(key);
    }

    fn remember(&mut self, key: &str) {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.to_string(), env::var(key).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => env::set_var(&key, value),
                None => env::remove_var(&key),
            }
        }
    }
}
