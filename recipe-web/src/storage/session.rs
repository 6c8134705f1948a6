//! Logged-in user cached across page reloads.

use serde::{Deserialize, Serialize};

use super::{KeyValueStore, STORAGE_USER, write_json};
use crate::error::StorageError;

/// The locally cached identity of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&self, username: &str) -> Result<(), StorageError> {
        let session = Session {
            username: username.to_string(),
        };
        write_json(&self.store, STORAGE_USER, &session)
    }

    /// Restore the saved session, if any.
    ///
    /// A record that fails to parse is deleted and reported as no session.
    pub fn restore(&self) -> Option<Session> {
        let raw = self.store.get(STORAGE_USER)?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if !session.username.is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "discarding invalid saved user data");
                self.store.delete(STORAGE_USER);
                None
            }
        }
    }

    pub fn clear(&self) {
        self.store.delete(STORAGE_USER);
    }
}
