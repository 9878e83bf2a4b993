//! Logger initialization.
//!
//! Logs go to stderr through `env_logger`, so scan results printed on stdout
//! stay machine-readable.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter, Record};

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate, so
/// `--log-level` on the command line always wins.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Quick debugging without CLI args
/// RUST_LOG=debug safelink scan links.txt
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=safelink::security=debug safelink scan links.txt
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("safelink", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}

/// One JSON object per record.
fn json_line(record: &Record<'_>) -> String {
    serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_fields() {
        let line = json_line(
            &Record::builder()
                .args(format_args!("flagged \"gogle.com\""))
                .level(Level::Warn)
                .target("safelink::security")
                .build(),
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["target"], "safelink::security");
        assert_eq!(parsed["msg"], "flagged \"gogle.com\"");
        assert!(parsed["ts"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        // env_logger can only be installed once per process
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
