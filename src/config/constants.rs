//! Configuration constants.
//!
//! This module defines the constants the classifier is built with: the trusted
//! domain list, the typosquat threshold, storage keys and presentation text.

/// Domains considered legitimate. Candidates that are close to, but not equal
/// to, one of these are reported as possible imposters.
///
/// Entries are lower-case hosts without scheme or path, and contain no duplicates.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "facebook.com",
    "amazon.com",
    "reddit.com",
    "wikipedia.org",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "paypal.com",
];

/// Maximum edit distance at which a domain still counts as a look-alike
/// (e.g. `gogle.com` or `amaz0n.com` are one edit away).
pub const TYPOSQUAT_MAX_DISTANCE: usize = 2;

/// Store key holding the blacklist array.
pub const BLACKLIST_KEY: &str = "safelink_blacklist";

/// Store key holding the settings object.
pub const SETTINGS_KEY: &str = "safelink_settings";

/// Prefix of the tooltip attached to suspicious links.
pub const WARNING_PREFIX: &str = "SafeLink Warning";

/// Default location of the JSON store used by the CLI.
pub const DEFAULT_STORE_PATH: &str = "./safelink_store.json";

/// Environment variable that overrides the default store location.
pub const STORE_PATH_ENV: &str = "SAFELINK_STORE";

/// Progress is logged every this many processed links.
pub const LOGGING_INTERVAL: usize = 500;
