//! Typed access to the blacklist and settings keys.
//!
//! Missing keys and malformed values both fall back to defaults (an empty
//! blacklist, every check enabled). Only failures of the store itself are
//! reported as errors.

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::KeyValueStore;
use crate::blacklist::Blacklist;
use crate::config::{BLACKLIST_KEY, SETTINGS_KEY};
use crate::error_handling::StorageError;
use crate::settings::Settings;

fn load_or_default<T, S>(store: &S, key: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(value) = store.get(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            warn!("Ignoring malformed value under '{key}', using defaults: {e}");
            Ok(T::default())
        }
    }
}

fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let value = serde_json::to_value(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, value)
}

/// Loads the blacklist.
///
/// Hand-edited entries are normalized on the way in: lower-cased, trimmed,
/// stripped of scheme and `www.`, with empty entries and repeats dropped.
pub fn load_blacklist<S: KeyValueStore + ?Sized>(store: &S) -> Result<Blacklist, StorageError> {
    let stored: Blacklist = load_or_default(store, BLACKLIST_KEY)?;
    Ok(Blacklist::from_entries(stored.into_inner()))
}

/// Writes the blacklist back to the store.
pub fn save_blacklist<S: KeyValueStore + ?Sized>(
    store: &mut S,
    blacklist: &Blacklist,
) -> Result<(), StorageError> {
    save(store, BLACKLIST_KEY, blacklist)
}

/// Loads the settings. Absent flags default to enabled.
pub fn load_settings<S: KeyValueStore + ?Sized>(store: &S) -> Result<Settings, StorageError> {
    load_or_default(store, SETTINGS_KEY)
}

/// Writes the settings back to the store.
pub fn save_settings<S: KeyValueStore + ?Sized>(
    store: &mut S,
    settings: &Settings,
) -> Result<(), StorageError> {
    save(store, SETTINGS_KEY, settings)
}

/// Seeds the blacklist from seed text on first use.
///
/// Does nothing if a blacklist is already stored, even an empty one.
///
/// # Returns
///
/// `true` if the seed was written.
pub fn seed_blacklist<S: KeyValueStore + ?Sized>(
    store: &mut S,
    seed_text: &str,
) -> Result<bool, StorageError> {
    if store.get(BLACKLIST_KEY)?.is_some() {
        return Ok(false);
    }
    let blacklist = Blacklist::from_seed_text(seed_text);
    save_blacklist(store, &blacklist)?;
    info!("Initial blacklist loaded into store ({} domains)", blacklist.len());
    Ok(true)
}
