//! safelink library: suspicious link classification
//!
//! This library decides whether a hyperlink looks suspicious using three
//! independent heuristics, evaluated in a fixed priority order:
//! 1. plaintext HTTP transport,
//! 2. membership in a user-maintained blacklist,
//! 3. visual similarity to a trusted domain (typosquatting, via Levenshtein
//!    distance).
//!
//! The classifier is a pure function of its inputs. The blacklist and settings
//! are owned by the caller and typically persisted in a [`storage`] backend.
//!
//! # Example
//!
//! ```
//! use safelink::domain::extract_domain;
//! use safelink::security::{classify, Classification, Reason};
//!
//! let url = "https://www.faceboook.com/login";
//! let domain = extract_domain(url).expect("link has a host");
//! assert_eq!(domain, "faceboook.com");
//!
//! let result = classify(url, &domain, &[], None);
//! assert_eq!(result, Classification::Unsafe(Reason::Imposter));
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod blacklist;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod initialization;
mod run;
pub mod security;
pub mod settings;
pub mod storage;

// Re-export public API
pub use blacklist::{AddOutcome, Blacklist};
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_scan, scan_links, LinkVerdict, ScanReport};
pub use security::{classify, Classification, Reason};
pub use settings::{CheckKind, Settings};
