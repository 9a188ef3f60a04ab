//! Persisted preference storage.
//!
//! The controller only sees the [`PreferencesStore`] trait; the browser
//! binding backs it with `window.localStorage`, tests and the CLI use
//! [`MemoryStore`].

use std::collections::HashMap;

use thiserror::Error;

/// Error type for preference storage operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No storage backend is reachable (e.g. storage disabled by the browser).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write (e.g. quota exceeded).
    #[error("Storage write rejected for {key}: {message}")]
    Rejected { key: String, message: String },
}

/// String key-value storage for preferences.
pub trait PreferencesStore {
    /// Read a value; absence and read failures both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            writes: 0,
        }
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferencesStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

impl<S: PreferencesStore + ?Sized> PreferencesStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("preferred-lang"), None);

        store.set("preferred-lang", "zh").unwrap();
        assert_eq!(store.get("preferred-lang").as_deref(), Some("zh"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_memory_store_with_entries() {
        let store = MemoryStore::with_entries([("preferred-theme", "dark")]);
        assert_eq!(store.get("preferred-theme").as_deref(), Some("dark"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Rejected {
            key: "preferred-lang".to_string(),
            message: "QuotaExceededError".to_string(),
        };
        assert!(err.to_string().contains("preferred-lang"));
        assert!(err.to_string().contains("QuotaExceededError"));
    }
}
