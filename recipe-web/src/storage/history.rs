//! Generation history, newest first, capped at [`MAX_HISTORY`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, STORAGE_RECIPE_HISTORY, prepend_bounded, read_json};
use crate::error::StorageError;

pub const MAX_HISTORY: usize = 100;

/// A single generation: what was asked and what came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub input: String,
    /// Rendered recipe markup. Older entries may lack it.
    #[serde(default)]
    pub recipe: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of generations.
#[derive(Debug, Clone)]
pub struct HistoryLog<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn append(&self, entry: HistoryEntry) -> Result<(), StorageError> {
        prepend_bounded(&self.store, STORAGE_RECIPE_HISTORY, entry, MAX_HISTORY).map(|_| ())
    }

    pub fn list(&self) -> Vec<HistoryEntry> {
        read_json(&self.store, STORAGE_RECIPE_HISTORY).unwrap_or_default()
    }
}
