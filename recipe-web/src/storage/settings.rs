//! UI preferences stored as plain strings under `app_<name>`.

use super::{KeyValueStore, STORAGE_SETTING_PREFIX};
use crate::error::StorageError;

pub const SETTING_LANGUAGE: &str = "language";
pub const SETTING_THEME: &str = "theme";

/// Color theme. Anything other than `dark` renders light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_setting(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn key(name: &str) -> String {
        format!("{}{}", STORAGE_SETTING_PREFIX, name)
    }

    /// Store `value` as a plain string.
    ///
    /// A value that itself starts with a quote is stored JSON-encoded so
    /// [`get`](Self::get) hands back exactly what was set.
    pub fn set(&self, name: &str, value: &str) -> Result<(), StorageError> {
        let key = Self::key(name);
        if value.starts_with('"') {
            let encoded = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
                key: key.clone(),
                message: e.to_string(),
            })?;
            return self.store.set(&key, &encoded);
        }
        self.store.set(&key, value)
    }

    /// The stored value, or `None` when unset.
    ///
    /// A stored JSON string literal (`"dark"` with the quotes) is unwrapped,
    /// so values written either raw or JSON-encoded read back the same.
    pub fn get(&self, name: &str) -> Option<String> {
        let raw = self.store.get(&Self::key(name))?;
        if raw.starts_with('"') {
            if let Ok(value) = serde_json::from_str::<String>(&raw) {
                return Some(value);
            }
        }
        Some(raw)
    }

    pub fn language(&self) -> Option<String> {
        self.get(SETTING_LANGUAGE)
    }

    pub fn theme(&self) -> Theme {
        self.get(SETTING_THEME)
            .map(|v| Theme::from_setting(&v))
            .unwrap_or_default()
    }
}
