//! Classification result types.

use std::fmt;

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Why a link was classified as suspicious.
///
/// The labels returned by [`Reason::label`] (and `Display`) are part of the
/// output contract: the presentation layer renders them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
pub enum Reason {
    /// Link uses plaintext `http://`
    Unencrypted,
    /// Link domain contains a blacklisted fragment
    Blacklisted,
    /// Link domain is a near miss of a trusted domain
    Imposter,
}

impl Reason {
    /// Returns the label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Reason::Unencrypted => "Unencrypted",
            Reason::Blacklisted => "Blacklisted",
            Reason::Imposter => "Imposter",
        }
    }

    /// Returns a longer human-readable description of the reason
    pub fn description(&self) -> &'static str {
        match self {
            Reason::Unencrypted => "Unencrypted (HTTP)",
            Reason::Blacklisted => "On Blacklist",
            Reason::Imposter => "Possible Imposter",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    /// No enabled check fired
    Safe,
    /// The first enabled check that fired
    Unsafe(Reason),
}

impl Classification {
    /// Returns the reason, or `None` for a safe link.
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Classification::Safe => None,
            Classification::Unsafe(reason) => Some(*reason),
        }
    }

    /// Returns `true` if no check fired.
    pub fn is_safe(&self) -> bool {
        matches!(self, Classification::Safe)
    }
}
