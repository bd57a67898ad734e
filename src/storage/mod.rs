pub mod json_backend;

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::errors::{FormError, Result};

/// Key under which the serialized ledger is kept.
pub const EXPENSES_KEY: &str = "expenses";

/// Abstraction over local key-value preference storage.
pub trait PreferencesStore: Send + Sync {
    /// Returns the stored value, or `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: PreferencesStore + ?Sized> PreferencesStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Process-local store, handy for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| FormError::Storage("preferences lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| FormError::Storage("preferences lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| FormError::Storage("preferences lock poisoned".into()))?;
        values.remove(key);
        Ok(())
    }
}

pub use json_backend::JsonPreferences;
