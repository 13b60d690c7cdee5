#![forbid(unsafe_code)]

//! Persistent preference storage.
//!
//! The chrome layer persists small user choices (toggle states, selected
//! locale) through a [`PrefsStore`]. Two backends ship here: an in-memory
//! store for tests, and a JSON file store for real sessions.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing file | First run | Empty store |
//! | Corrupt file | Schema drift, truncation | Empty store, warning logged |
//! | Write error | Disk/permissions | Value kept in memory, warning logged |

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A single persisted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Str(String),
}

/// Key-value preference storage.
///
/// Writes take effect immediately; there is no separate flush step
/// (each `set_*` persists before returning, matching the original
/// save-on-write behavior).
pub trait PrefsStore {
    /// Look up a string preference.
    fn get_str(&self, key: &str) -> Option<String>;
    /// Store a string preference.
    fn set_str(&mut self, key: &str, value: &str);
    /// Look up a boolean preference.
    fn get_bool(&self, key: &str) -> Option<bool>;
    /// Store a boolean preference.
    fn set_bool(&mut self, key: &str, value: bool);
    /// Whether any value is stored under `key`.
    fn contains(&self, key: &str) -> bool;
}

/// In-memory preference store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: AHashMap<String, PrefValue>,
}

impl MemoryPrefs {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefsStore for MemoryPrefs {
    fn get_str(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(PrefValue::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn set_str(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_owned(), PrefValue::Str(value.to_owned()));
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(PrefValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_owned(), PrefValue::Bool(value));
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// JSON-file-backed preference store.
///
/// The whole store is one JSON object; every `set_*` rewrites the file.
/// That is acceptable here because the chrome layer persists a handful of
/// keys, not bulk state.
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    values: AHashMap<String, PrefValue>,
}

impl FilePrefs {
    /// Open (or create) a preference file at `path`.
    ///
    /// A missing or unreadable file yields an empty store; corruption is
    /// logged, never fatal.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::load(&path);
        Self { path, values }
    }

    fn load(path: &Path) -> AHashMap<String, PrefValue> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return AHashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read prefs; starting empty");
                return AHashMap::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(values) => values,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt prefs file; starting empty");
                AHashMap::new()
            }
        }
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize prefs");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "failed to write prefs");
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefsStore for FilePrefs {
    fn get_str(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(PrefValue::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn set_str(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_owned(), PrefValue::Str(value.to_owned()));
        self.persist();
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(PrefValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_owned(), PrefValue::Bool(value));
        self.persist();
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}
