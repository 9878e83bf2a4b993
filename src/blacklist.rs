//! User-editable domain blacklist.
//!
//! The blacklist is an ordered list of lower-case domain fragments owned by the
//! caller. The classifier only ever reads it (as a slice); edits go through
//! [`Blacklist::add`] and [`Blacklist::remove`], which keep every entry trimmed,
//! non-empty and unique.

use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Optional scheme and `www.` in front of a pasted domain.
static ENTRY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.)?").expect("blacklist prefix pattern is valid")
});

/// Result of [`Blacklist::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The normalized entry was appended
    Added(String),
    /// The normalized entry was already present; nothing changed
    Duplicate(String),
    /// Nothing was left after normalization
    Empty,
}

/// Ordered list of blacklisted domain fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blacklist(Vec<String>);

impl Blacklist {
    /// Creates an empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the bundled seed format: one domain per line, blank lines ignored.
    ///
    /// Each line is normalized like [`Blacklist::add`] input; repeats are dropped.
    pub fn from_seed_text(text: &str) -> Self {
        Self::from_entries(text.lines())
    }

    /// Builds a blacklist from raw entries, normalizing each one and keeping
    /// the first occurrence of every entry.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blacklist = Self::new();
        for entry in entries {
            blacklist.add(entry.as_ref());
        }
        blacklist
    }

    /// Cleans up user input into a blacklist entry.
    ///
    /// Trims and lower-cases the input, drops a leading `http://` or `https://`
    /// and a leading `www.`, then keeps everything before the first `/`.
    /// Returns `None` if nothing is left.
    pub fn normalize_entry(raw: &str) -> Option<String> {
        let lowered = raw.trim().to_lowercase();
        let stripped = ENTRY_PREFIX.replace(&lowered, "");
        let entry = stripped.split('/').next().unwrap_or_default();
        if entry.is_empty() {
            None
        } else {
            Some(entry.to_string())
        }
    }

    /// Normalizes `raw` and appends it unless it is empty or already listed.
    pub fn add(&mut self, raw: &str) -> AddOutcome {
        let Some(entry) = Self::normalize_entry(raw) else {
            return AddOutcome::Empty;
        };
        if self.0.contains(&entry) {
            return AddOutcome::Duplicate(entry);
        }
        self.0.push(entry.clone());
        AddOutcome::Added(entry)
    }

    /// Removes the entry at `index`, returning it. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Consumes the blacklist, returning the entries.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Blacklist {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
