//! Application configuration and constants.
//!
//! This module provides:
//! - Classifier constants (trusted domains, typosquat threshold, store keys)
//! - Scan configuration and logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
