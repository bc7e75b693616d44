//! Durable key-value storage for session state.
//!
//! DESIGN
//! ======
//! The session store persists its token and role through a small string
//! key-value abstraction, the native analog of the browser's local storage.
//! Restore must never fail: a missing or unreadable backing file simply yields
//! an empty store, and write failures are logged and swallowed so a full disk
//! cannot break an in-memory session.

use std::collections::HashMap;
use std::path::PathBuf;

/// Storage key for the opaque session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key for the session role string.
pub const USER_ROLE_KEY: &str = "user_role";
/// Storage key for the display name.
pub const USERNAME_KEY: &str = "username";

/// String key-value store surviving process restarts.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if absent.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str);
    /// Remove a value if present.
    fn remove(&mut self, key: &str);
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Write-through store backed by a single JSON object file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, loading any existing snapshot.
    ///
    /// An absent or corrupt file yields an empty store; corruption is logged
    /// but never propagated.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt storage file");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn flush(&self) {
        match serde_json::to_vec_pretty(&self.entries) {
            Ok(bytes) => {
                if let Err(err) = std::fs::write(&self.path, bytes) {
                    tracing::warn!(path = %self.path.display(), error = %err, "storage write failed");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "storage serialization failed");
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
