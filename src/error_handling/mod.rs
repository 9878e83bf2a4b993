//! Error handling and scan statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and the store
//! - Scan statistics tracking (per-reason counts, safe and skipped links)
//!
//! The classifier itself never fails; errors only come from the peripheral
//! layers around it.

mod stats;
mod types;

// Re-export public API
pub use stats::ScanStats;
pub use types::{InitializationError, StorageError};
