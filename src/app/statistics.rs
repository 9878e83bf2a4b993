//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::ScanStats;
use crate::security::Reason;

/// Prints per-reason counts to the log.
pub fn print_scan_statistics(stats: &ScanStats) {
    let total_suspicious = stats.total_suspicious();
    if total_suspicious > 0 {
        info!("Suspicious Links ({} total):", total_suspicious);
        for reason in Reason::iter() {
            let count = stats.get_reason_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.description(), count);
            }
        }
    }

    if stats.skipped() > 0 {
        info!("Skipped (no domain): {}", stats.skipped());
    }
}
