//! Application initialization.
//!
//! This module sets up process-wide resources for the CLI: the logger and the
//! store location.

mod logger;

use std::path::PathBuf;

use crate::config::{DEFAULT_STORE_PATH, STORE_PATH_ENV};

// Re-export public API
pub use logger::init_logger_with;

/// Resolves the store path.
///
/// An explicit path wins, then the `SAFELINK_STORE` environment variable, then
/// the default `./safelink_store.json`.
pub fn resolve_store_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(STORE_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_store_path_wins() {
        let path = resolve_store_path(Some(PathBuf::from("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }
}
