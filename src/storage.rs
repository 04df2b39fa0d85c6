// SPDX-License-Identifier: MPL-2.0
//! Persistent key-value storage using CBOR format.
//!
//! This module provides an opaque string-keyed store for small pieces of
//! application state (first-launch flags, last-used values) that persist
//! across sessions but are not user preferences (those live in
//! `settings.toml`, see [`crate::config`]).
//!
//! Values are stored as CBOR (Concise Binary Object Representation):
//! - Compact binary storage
//! - Fast serialization/deserialization
//! - Clear separation from user-editable TOML preferences
//!
//! Reads are tolerant by design: a missing key, a corrupt value, or a corrupt
//! file never produce an error — the caller simply sees nothing and the
//! application starts fresh. Load and save report problems through an
//! optional warning message suitable for a notification toast.
//!
//! # Path Resolution
//!
//! The store location can be customized for testing or portable deployments:
//! 1. Use `load_from()`/`save_to()` with an explicit path override
//! 2. `--data-dir` CLI flag / `ICED_BEACON_DATA_DIR` environment variable
//! 3. Falls back to the platform-specific data directory

use crate::app::paths;
use crate::error::Result;
use ciborium::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Store file name within the app data directory.
const STORE_FILE: &str = "store.cbor";

/// An opaque, persistent key-value store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    values: BTreeMap<String, Value>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from the default location.
    ///
    /// Returns a tuple of (store, optional warning). If loading fails, returns
    /// an empty store with a warning message explaining what went wrong; the
    /// warning can be surfaced to the user via notifications.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the store from a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default path
    ///   resolution.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::store_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(values) => (Self { values }, None),
                    Err(_) => (
                        Self::default(),
                        Some("Stored data could not be read; starting fresh.".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("Stored data could not be opened; starting fresh.".to_string()),
            ),
        }
    }

    /// Saves the store to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning message if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the store to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::store_file_path_with_override(base_dir) else {
            return Some("No data directory is available; changes will not persist.".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("The data directory could not be created.".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(&self.values, writer).is_err() {
                    return Some("Stored data could not be written.".to_string());
                }
                None
            }
            Err(_) => Some("The store file could not be created.".to_string()),
        }
    }

    /// Serializes `value` under `key`, replacing any previous value.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> Result<()> {
        let encoded = Value::serialized(value)?;
        self.values.insert(key.into(), encoded);
        Ok(())
    }

    /// Deserializes the value under `key`.
    ///
    /// Returns `None` when the key is absent or the stored value does not
    /// deserialize as `T` — a stale or corrupt entry reads as missing.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| value.deserialized().ok())
    }

    /// Removes the value under `key`. Returns whether a value was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// Returns whether a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the full path to the store file with optional override.
    fn store_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STORE_FILE);
            path
        })
    }
}
