//! Key/value preference storage.
//!
//! The page persists exactly one preference (the theme), but the store is a
//! trait so the theme controller can run against `localStorage` in the
//! browser and against [`MemoryStore`] in tests.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `StorageError::Unavailable` | Storage disabled or absent | Caller falls back silently |
//! | `StorageError::Backend` | Host rejected the read/write (quota, privacy mode) | Caller logs and continues |

use std::collections::HashMap;
use std::fmt;

/// Errors that can occur during preference storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store is not available in this environment.
    Unavailable(String),
    /// The backing store rejected the operation.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
            StorageError::Backend(msg) => write!(f, "storage backend error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A string key/value store that survives page reloads.
pub trait PreferenceStore {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory store for tests and hosts without persistent storage.
///
/// Values are lost when the store is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut data = HashMap::new();
        data.insert(key.into(), value.into());
        Self { data }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn name(&self) -> &str {
        "MemoryStore"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
