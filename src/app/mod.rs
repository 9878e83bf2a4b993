//! Application-level helpers for the scan runner.

pub mod input;
pub mod logging;
pub mod statistics;
pub mod warning;

pub use input::{parse_link_lines, read_link_lines};
pub use logging::log_progress;
pub use statistics::print_scan_statistics;
pub use warning::warning_tooltip;
