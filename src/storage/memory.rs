//! In-memory store backend.

use std::collections::HashMap;

use serde_json::Value;

use super::KeyValueStore;
use crate::error_handling::StorageError;

/// Store backed by a `HashMap`. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
