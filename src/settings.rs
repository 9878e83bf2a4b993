//! Per-check enable/disable settings.
//!
//! Settings are owned by the caller (persisted under
//! [`SETTINGS_KEY`](crate::config::SETTINGS_KEY)) and passed by value into every
//! classification. Each flag defaults to `true` when it is absent, so a partially
//! written settings object never silently turns a check off.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// One of the three independent link checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, EnumIterMacro)]
pub enum CheckKind {
    /// Plaintext `http://` links
    Http,
    /// Links whose domain contains a blacklisted fragment
    Blacklist,
    /// Links whose domain is a near miss of a trusted domain
    Imposter,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckKind::Http => "http",
            CheckKind::Blacklist => "blacklist",
            CheckKind::Imposter => "imposter",
        })
    }
}

fn enabled() -> bool {
    true
}

/// Which checks the classifier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Flag plaintext HTTP links
    #[serde(default = "enabled")]
    pub check_http: bool,
    /// Flag links matching the blacklist
    #[serde(default = "enabled")]
    pub check_blacklist: bool,
    /// Flag look-alikes of trusted domains
    #[serde(default = "enabled")]
    pub check_imposter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            check_http: true,
            check_blacklist: true,
            check_imposter: true,
        }
    }
}

impl Settings {
    /// Settings with every check switched off.
    pub fn all_disabled() -> Self {
        Self {
            check_http: false,
            check_blacklist: false,
            check_imposter: false,
        }
    }

    /// Returns whether `kind` is enabled.
    pub fn is_enabled(&self, kind: CheckKind) -> bool {
        match kind {
            CheckKind::Http => self.check_http,
            CheckKind::Blacklist => self.check_blacklist,
            CheckKind::Imposter => self.check_imposter,
        }
    }

    /// Switches a single check on or off.
    pub fn set(&mut self, kind: CheckKind, on: bool) {
        match kind {
            CheckKind::Http => self.check_http = on,
            CheckKind::Blacklist => self.check_blacklist = on,
            CheckKind::Imposter => self.check_imposter = on,
        }
    }
}
