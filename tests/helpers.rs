// Shared test helpers for store and link file setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::{Path, PathBuf};

use safelink::storage::{save_blacklist, save_settings, JsonFileStore};
use safelink::{Blacklist, Config, LogFormat, LogLevel, Settings};
use tempfile::{NamedTempFile, TempDir};

/// Writes one link per line to a temporary file.
pub fn write_links_to_file(links: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for link in links {
        writeln!(file, "{}", link).expect("Failed to write link");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Creates a store file in `dir` holding the given blacklist and settings.
pub fn create_store(dir: &TempDir, blacklist: &[&str], settings: Settings) -> PathBuf {
    let path = dir.path().join("safelink_store.json");
    let mut store = JsonFileStore::new(&path);
    let mut list = Blacklist::new();
    for entry in blacklist {
        list.add(entry);
    }
    save_blacklist(&mut store, &list).expect("Failed to save blacklist");
    save_settings(&mut store, &settings).expect("Failed to save settings");
    path
}

/// Builds a scan config with quiet logging.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(file: &Path, store_path: PathBuf) -> Config {
    Config {
        file: file.to_path_buf(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        store_path,
        disabled_checks: Vec::new(),
        fail_on_suspicious: false,
    }
}
