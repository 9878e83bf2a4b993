//! Link classification.
//!
//! This module decides whether a link looks suspicious, using three
//! independent heuristics:
//! - Plaintext HTTP transport
//! - Membership in a caller-supplied blacklist
//! - Visual similarity to a trusted domain (typosquatting)
//!
//! Everything here is pure: no I/O and no shared mutable state, so
//! classification can run concurrently from any number of callers.

mod analysis;
mod checks;
mod edit_distance;
mod typosquat;
mod types;

pub use analysis::classify;
pub use checks::{is_blacklisted, is_unencrypted};
pub use edit_distance::levenshtein;
pub use typosquat::{closest_trusted_domain, is_typosquat, is_typosquat_of};
pub use types::{Classification, Reason};
