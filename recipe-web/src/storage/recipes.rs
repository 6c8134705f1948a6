//! Saved recipes, newest first, capped at [`MAX_RECIPES`].

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{KeyValueStore, STORAGE_SAVED_RECIPES, prepend_bounded, read_json, write_json};
use crate::error::StorageError;

pub const MAX_RECIPES: usize = 50;
const TITLE_CHARS: usize = 50;

/// Opaque recipe identifier.
///
/// Stored ids are normally millisecond timestamps written as JSON numbers,
/// but ids round-trip through the view layer as strings. Both forms are
/// normalized on construction so `123` and `"123"` compare equal.
// Loose numeric/string equality carried over from the stored data format;
// revisit once nothing writes string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref().trim();
        match raw.parse::<i64>() {
            Ok(n) => Self(n.to_string()),
            Err(_) => Self(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as a millisecond timestamp, when it is numeric.
    pub fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl From<i64> for RecipeId {
    fn from(millis: i64) -> Self {
        Self(millis.to_string())
    }
}

impl From<&str> for RecipeId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for RecipeId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RecipeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_millis() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => RecipeId::from(n),
            RawId::Float(f) if f.fract() == 0.0 => RecipeId::from(f as i64),
            RawId::Float(f) => RecipeId(f.to_string()),
            RawId::Text(s) => RecipeId::new(s),
        })
    }
}

/// A saved recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    /// Rendered recipe markup, as returned by the backend.
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// Title shown for a recipe saved from `input`: its first 50 characters and an ellipsis.
pub fn recipe_title(input: &str) -> String {
    let head: String = input.chars().take(TITLE_CHARS).collect();
    format!("{}...", head)
}

#[derive(Debug, Clone)]
pub struct RecipeCollection<S> {
    store: S,
}

impl<S: KeyValueStore> RecipeCollection<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a recipe at the front, evicting the oldest beyond [`MAX_RECIPES`].
    pub fn add(&self, recipe: Recipe) -> Result<(), StorageError> {
        let entries = prepend_bounded(&self.store, STORAGE_SAVED_RECIPES, recipe, MAX_RECIPES)?;
        tracing::debug!(count = entries.len(), "saved recipe");
        Ok(())
    }

    /// Build a recipe from a generation and add it.
    ///
    /// The id is the creation time in milliseconds, bumped to the next free
    /// value when another stored recipe already holds it.
    pub fn create(
        &self,
        input: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Recipe, StorageError> {
        let taken: HashSet<i64> = self.list().iter().filter_map(|r| r.id.as_millis()).collect();
        let mut id = now.timestamp_millis();
        while taken.contains(&id) {
            // At most MAX_RECIPES ids are taken, so a free one exists in either direction.
            id = id.checked_add(1).unwrap_or(i64::MIN);
        }

        let recipe = Recipe {
            id: RecipeId::from(id),
            title: recipe_title(input),
            content: content.to_string(),
            created_at: now,
            tags: BTreeSet::new(),
        };
        self.add(recipe.clone())?;
        Ok(recipe)
    }

    /// All saved recipes, newest first. Empty when absent or corrupt.
    pub fn list(&self) -> Vec<Recipe> {
        read_json(&self.store, STORAGE_SAVED_RECIPES).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: &RecipeId) -> Option<Recipe> {
        self.list().into_iter().find(|r| &r.id == id)
    }

    /// Remove every recipe with a matching id.
    pub fn remove(&self, id: &RecipeId) -> Result<(), StorageError> {
        let mut entries = self.list();
        entries.retain(|r| &r.id != id);
        write_json(&self.store, STORAGE_SAVED_RECIPES, &entries)
    }
}
