//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::DEFAULT_STORE_PATH;
use crate::settings::CheckKind;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scan configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use safelink::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("links.txt"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read links from (`-` reads stdin)
    pub file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// JSON store holding the blacklist and settings
    pub store_path: PathBuf,

    /// Checks switched off for this run, regardless of stored settings
    pub disabled_checks: Vec<CheckKind>,

    /// Treat any suspicious link as a failed run
    pub fail_on_suspicious: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("links.txt"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            disabled_checks: Vec::new(),
            fail_on_suspicious: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_log_format_debug() {
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.file, PathBuf::from("links.txt"));
        assert_eq!(config.store_path, PathBuf::from("./safelink_store.json"));
        assert!(config.disabled_checks.is_empty());
        assert!(!config.fail_on_suspicious);
    }
}
