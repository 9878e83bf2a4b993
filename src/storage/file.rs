//! JSON file store backend.
//!
//! The whole store is one JSON object. Reads load the file on every call so
//! edits made by another process are picked up. Writes go to a temporary file
//! next to the store which then replaces it, so the store is never half-written.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use super::KeyValueStore;
use crate::error_handling::StorageError;

/// Store persisted as a JSON object in a single file.
///
/// A missing file is an empty store; it is created on the first `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store at `path`. Nothing is read until the first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(ref e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store {} does not exist yet", self.path.display());
                return Ok(Map::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::NotAnObject(self.path.clone())),
            Err(source) => Err(StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_map(&self, map: Map<String, Value>, key: &str) -> Result<(), StorageError> {
        let io_error = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(io_error)?;

        let body = serde_json::to_string_pretty(&Value::Object(map)).map_err(|source| {
            StorageError::Serialize {
                key: key.to_string(),
                source,
            }
        })?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(io_error)?;
        tmp.write_all(body.as_bytes()).map_err(io_error)?;
        tmp.as_file().sync_all().map_err(io_error)?;
        tmp.persist(&self.path).map_err(|e| io_error(e.error))?;
        debug!("Wrote store {}", self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        self.write_map(map, key)
    }
}
