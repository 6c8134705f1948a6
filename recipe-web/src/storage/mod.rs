//! Centralized storage module for localStorage operations.
//!
//! Every store reads and writes JSON text under a fixed key. Reads are
//! forgiving: a missing key or a value that fails to parse is treated as
//! empty state so corrupt local data never blocks the UI.

mod backend;
pub mod history;
pub mod recipes;
pub mod session;
pub mod settings;

pub use backend::{BrowserStorage, KeyValueStore, MemoryStore};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

// Storage keys
pub const STORAGE_USER: &str = "recipeApp_user";
pub const STORAGE_SAVED_RECIPES: &str = "savedRecipes";
pub const STORAGE_RECIPE_HISTORY: &str = "recipeHistory";
pub const STORAGE_SETTING_PREFIX: &str = "app_";

/// Read and parse the JSON value under `key`.
///
/// Returns `None` when the key is absent or the value does not parse.
pub fn read_json<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring corrupt stored value");
            None
        }
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn write_json<S: KeyValueStore, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, &raw)
}

/// Read a bounded newest-first list, prepend `entry`, truncate to `cap` and write it back.
pub(crate) fn prepend_bounded<S, T>(
    store: &S,
    key: &str,
    entry: T,
    cap: usize,
) -> Result<Vec<T>, StorageError>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned,
{
    let mut entries: Vec<T> = read_json(store, key).unwrap_or_default();
    entries.insert(0, entry);
    entries.truncate(cap);
    write_json(store, key, &entries)?;
    Ok(entries)
}
