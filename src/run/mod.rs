//! Batch scanning of links.
//!
//! This is the front-end that plays the role of the page scanner: it extracts
//! a domain from each link, skips links without one, classifies the rest and
//! tallies the outcome.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::app::{log_progress, print_scan_statistics, read_link_lines};
use crate::blacklist::Blacklist;
use crate::config::{Config, LOGGING_INTERVAL};
use crate::domain::extract_domain;
use crate::error_handling::ScanStats;
use crate::security::{classify, closest_trusted_domain, Reason};
use crate::settings::Settings;
use crate::storage::{load_blacklist, load_settings, JsonFileStore};

/// Outcome for one input link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkVerdict {
    /// The link as read from input
    pub url: String,
    /// Normalized host, or `None` if the link was skipped
    pub domain: Option<String>,
    /// Why the link is suspicious, or `None` if it is safe or skipped
    pub reason: Option<Reason>,
}

/// Results of a scan run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Total number of links read
    pub total: usize,
    /// Links that passed every enabled check
    pub safe: usize,
    /// Links flagged by any check
    pub suspicious: usize,
    /// Links without an extractable domain
    pub skipped: usize,
    /// Per-link outcomes, in input order
    pub verdicts: Vec<LinkVerdict>,
    /// Store the blacklist and settings were read from
    pub store_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ScanReport {
    /// Iterates over flagged links only.
    pub fn suspicious_links(&self) -> impl Iterator<Item = &LinkVerdict> {
        self.verdicts.iter().filter(|v| v.reason.is_some())
    }
}

/// Classifies a batch of links against an already-loaded blacklist and settings.
///
/// Links without a domain are recorded as skipped and never classified.
pub fn scan_links<I, S>(
    links: I,
    blacklist: &Blacklist,
    settings: Settings,
    stats: &ScanStats,
) -> Vec<LinkVerdict>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let start_time = Instant::now();
    let mut verdicts = Vec::new();

    for (index, link) in links.into_iter().enumerate() {
        let url: String = link.into();
        let Some(domain) = extract_domain(&url) else {
            debug!("Skipping link without a domain: {url}");
            stats.record_skipped();
            verdicts.push(LinkVerdict {
                url,
                domain: None,
                reason: None,
            });
            continue;
        };

        let classification = classify(&url, &domain, blacklist, Some(settings));
        stats.record(classification);

        if let Some(reason) = classification.reason() {
            if reason == Reason::Imposter {
                if let Some((target, distance)) = closest_trusted_domain(&domain) {
                    debug!("{domain} is {distance} edit(s) from {target}");
                }
            }
            debug!("{url} flagged: {reason}");
        }

        verdicts.push(LinkVerdict {
            url,
            domain: Some(domain),
            reason: classification.reason(),
        });

        if (index + 1) % LOGGING_INTERVAL == 0 {
            log_progress(start_time, index + 1);
        }
    }

    verdicts
}

/// Runs a scan with the provided configuration.
///
/// Reads links from `config.file` (or stdin for `-`), loads the blacklist and
/// settings from the JSON store at `config.store_path`, applies
/// `config.disabled_checks` on top of the stored settings for this run only,
/// and classifies every link.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the store cannot be opened.
/// Malformed values inside the store are not errors; defaults are used.
///
/// # Example
///
/// ```no_run
/// use safelink::{run_scan, Config};
/// use std::path::PathBuf;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("links.txt"),
///     ..Default::default()
/// };
/// let report = run_scan(config)?;
/// println!("{} of {} links are suspicious", report.suspicious, report.total);
/// # Ok(())
/// # }
/// ```
pub fn run_scan(config: Config) -> Result<ScanReport> {
    let start_time = Instant::now();

    let links = read_link_lines(&config.file)?;
    info!("Total links to check: {}", links.len());

    let store = JsonFileStore::new(&config.store_path);
    let blacklist = load_blacklist(&store).context("Failed to load blacklist")?;
    let mut settings = load_settings(&store).context("Failed to load settings")?;
    for kind in &config.disabled_checks {
        settings.set(*kind, false);
    }
    if !blacklist.is_empty() {
        info!("Blacklist loaded from store with {} domains", blacklist.len());
    }
    debug!("Effective settings: {settings:?}");

    let stats = ScanStats::new();
    let verdicts = scan_links(links, &blacklist, settings, &stats);

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_scan_statistics(&stats);

    Ok(ScanReport {
        total: stats.total(),
        safe: stats.safe(),
        suspicious: stats.total_suspicious(),
        skipped: stats.skipped(),
        verdicts,
        store_path: config.store_path,
        elapsed_seconds,
    })
}
