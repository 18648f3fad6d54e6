//! Injectable key-value persistence for session state.
//!
//! The directory app keeps session state — auth token, signed-in user,
//! theme choice, saved restaurants — under well-known keys. Rather than
//! reaching for ambient storage, the core takes a [`StoragePort`] so the
//! ranking and avatar code stays pure and callers decide where values live:
//! in memory for tests, in a JSON file for the CLI.
//!
//! The file store is deliberately forgiving on load: a missing, corrupt, or
//! version-mismatched file comes back as an empty store. Session state is
//! always reconstructible, so losing it is an inconvenience, not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Auth token, as issued by `POST /auth/login`.
pub const KEY_TOKEN: &str = "bm_token";
/// Signed-in user record, JSON-encoded.
pub const KEY_USER: &str = "bm_user";
/// Theme preference: "light" or "dark".
pub const KEY_THEME: &str = "bm_theme";
/// Saved restaurant ids, JSON array.
pub const KEY_SAVED: &str = "bm_saved";
/// Last-used listing params, as a query string.
pub const KEY_PARAMS: &str = "bm_params";

/// Version of the store file format. Bump to discard old files wholesale.
const STORE_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value store with `get`/`set`/`remove`/`clear`.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Ephemeral store for tests and one-shot invocations.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.values.clear();
        Ok(())
    }
}

/// On-disk file payload.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    values: HashMap<String, String>,
}

/// JSON-file-backed store. Every mutation persists immediately.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`. Missing or unreadable files load as empty.
    pub fn load(path: &Path) -> Self {
        let values = std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<StoreFile>(&content).ok())
            .filter(|file| file.version == STORE_VERSION)
            .map(|file| file.values)
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let file = StoreFile {
            version: STORE_VERSION,
            values: self.values.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl StoragePort for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        self.persist()
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.values.clear();
        self.persist()
    }
}

/// Theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Typed view over a storage port for the session keys the app uses.
pub struct Session<P: StoragePort> {
    port: P,
}

impl<P: StoragePort> Session<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub fn into_port(self) -> P {
        self.port
    }

    pub fn token(&self) -> Option<String> {
        self.port.get(KEY_TOKEN)
    }

    pub fn set_token(&mut self, token: &str) -> Result<(), StorageError> {
        self.port.set(KEY_TOKEN, token)
    }

    pub fn user_json(&self) -> Option<String> {
        self.port.get(KEY_USER)
    }

    pub fn set_user_json(&mut self, user: &str) -> Result<(), StorageError> {
        self.port.set(KEY_USER, user)
    }

    /// Drop token and user, keeping theme and saved restaurants.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.port.remove(KEY_TOKEN)?;
        self.port.remove(KEY_USER)
    }

    /// Stored theme; unrecognized values read as the default.
    pub fn theme(&self) -> Theme {
        self.port
            .get(KEY_THEME)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.port.set(KEY_THEME, theme.as_str())
    }

    /// Saved restaurant ids. Corrupt values read as empty.
    pub fn saved_ids(&self) -> Vec<u64> {
        self.port
            .get(KEY_SAVED)
            .and_then(|v| serde_json::from_str(&v).ok())
            .unwrap_or_default()
    }

    /// Add or remove a restaurant from the saved list.
    pub fn toggle_saved(&mut self, id: u64) -> Result<(), StorageError> {
        let mut ids = self.saved_ids();
        match ids.iter().position(|&saved| saved == id) {
            Some(index) => {
                ids.remove(index);
            }
            None => ids.push(id),
        }
        self.port.set(KEY_SAVED, &serde_json::to_string(&ids)?)
    }

    /// Last-used listing params as a query string.
    pub fn params(&self) -> Option<String> {
        self.port.get(KEY_PARAMS)
    }

    pub fn set_params(&mut self, query_string: &str) -> Result<(), StorageError> {
        self.port.set(KEY_PARAMS, query_string)
    }
}
