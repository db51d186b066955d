//! Key-value persistence
//!
//! The plan and pending reminders are stored as whole JSON documents under
//! string keys. Backends only need string get/set/remove; serialization and
//! validation happen in the typed stores built on top.

pub mod file;
pub mod memory;
pub mod plan_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use plan_store::{PlanStore, PlanStoreError, PLAN_KEY};

use thiserror::Error;

/// Failures raised by a key-value backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem error
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot store
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),
}

/// Opaque string-to-string preference store
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if the key was never set
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// All stored keys, sorted
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Delete every key
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn clear(&mut self) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Keys are limited to ASCII letters, digits, `_` and `-` so every backend can hold them
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("weekly_study_plan").is_ok());
        assert!(validate_key("study-streak2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("plan.tmp").is_err());
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("user_settings", "{}").unwrap();
        assert_eq!(store.get("user_settings").unwrap().as_deref(), Some("{}"));
        assert_eq!(store.keys().unwrap(), ["user_settings"]);
        store.clear().unwrap();
        assert!(store.get("user_settings").unwrap().is_none());
    }
}
