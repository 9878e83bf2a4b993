//! Progress logging utilities.

use log::info;

/// Logs how many links have been processed and the rate so far.
pub fn log_progress(start_time: std::time::Instant, completed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} links in {:.2} seconds (~{:.2} links/sec)",
        completed, elapsed_secs, rate
    );
}
