//! Persistence for the blacklist and settings.
//!
//! The classifier never touches storage. Front-ends load the blacklist and
//! settings from a [`KeyValueStore`] before classifying and write them back
//! after edits. Two backends are provided:
//! - [`JsonFileStore`]: a single JSON object in a file (used by the CLI)
//! - [`MemoryStore`]: an in-process map (tests and embedding)

mod file;
mod memory;
mod records;

use serde_json::Value;

use crate::error_handling::StorageError;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use records::{load_blacklist, load_settings, save_blacklist, save_settings, seed_blacklist};

/// Minimal get/set key-value interface.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}
