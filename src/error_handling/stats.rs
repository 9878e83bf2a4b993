//! Scan statistics tracking.
//!
//! This module provides thread-safe counters for the outcome of each scanned
//! link: which reason flagged it, whether it was safe, or whether it was
//! skipped because no domain could be extracted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use crate::security::{Classification, Reason};

/// Thread-safe scan statistics tracker.
///
/// Counters are atomics, so a `ScanStats` can be shared across threads using
/// `Arc`. All reasons are initialized to zero on creation.
pub struct ScanStats {
    reasons: HashMap<Reason, AtomicUsize>,
    safe: AtomicUsize,
    skipped: AtomicUsize,
}

impl ScanStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut reasons = HashMap::new();
        for reason in Reason::iter() {
            reasons.insert(reason, AtomicUsize::new(0));
        }

        ScanStats {
            reasons,
            safe: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
        }
    }

    /// Records the outcome of one classification.
    pub fn record(&self, classification: Classification) {
        match classification {
            Classification::Safe => {
                self.safe.fetch_add(1, Ordering::Relaxed);
            }
            Classification::Unsafe(reason) => {
                if let Some(counter) = self.reasons.get(&reason) {
                    counter.fetch_add(1, Ordering::Relaxed);
                } else {
                    log::error!(
                        "Attempted to increment counter for {:?} which is not in the map. \
                         This indicates a bug in ScanStats initialization.",
                        reason
                    );
                }
            }
        }
    }

    /// Records a link that was not classified (no domain).
    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Links flagged for `reason`.
    pub fn get_reason_count(&self, reason: Reason) -> usize {
        self.reasons
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Links that passed every enabled check.
    pub fn safe(&self) -> usize {
        self.safe.load(Ordering::SeqCst)
    }

    /// Links without an extractable domain.
    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::SeqCst)
    }

    /// Total links flagged for any reason.
    pub fn total_suspicious(&self) -> usize {
        self.reasons.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Total links seen, including skipped ones.
    pub fn total(&self) -> usize {
        self.total_suspicious() + self.safe() + self.skipped()
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
