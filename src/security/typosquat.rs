//! Typosquat (look-alike domain) detection.

use log::debug;

use super::levenshtein;
use crate::config::{TRUSTED_DOMAINS, TYPOSQUAT_MAX_DISTANCE};

/// Returns `true` if `domain` is within [`TYPOSQUAT_MAX_DISTANCE`] edits of a
/// trusted domain without being identical to it.
///
/// Exact matches are legitimate and never flagged.
pub fn is_typosquat(domain: &str) -> bool {
    is_typosquat_of(domain, TRUSTED_DOMAINS)
}

/// Same as [`is_typosquat`], against an arbitrary trusted list.
pub fn is_typosquat_of(domain: &str, trusted: &[&str]) -> bool {
    let hit = trusted.iter().find(|trusted_domain| {
        let distance = levenshtein(domain, trusted_domain);
        distance > 0 && distance <= TYPOSQUAT_MAX_DISTANCE
    });

    if let Some(target) = hit {
        debug!("{domain} looks like trusted domain {target}");
    }
    hit.is_some()
}

/// Returns the trusted domain nearest to `domain` and its distance.
///
/// Ties resolve to the earlier entry in [`TRUSTED_DOMAINS`].
pub fn closest_trusted_domain(domain: &str) -> Option<(&'static str, usize)> {
    TRUSTED_DOMAINS
        .iter()
        .map(|trusted| (*trusted, levenshtein(domain, trusted)))
        .min_by_key(|(_, distance)| *distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_edit_is_flagged() {
        assert!(is_typosquat("gogle.com"));
        assert!(is_typosquat("amaz0n.com"));
        assert!(is_typosquat("paypa1.com"));
        assert!(is_typosquat("faceboook.com"));
    }

    #[test]
    fn test_two_edits_is_flagged() {
        assert!(is_typosquat("g00gle.com"));
        assert!(is_typosquat("instagrarn.com"));
    }

    #[test]
    fn test_exact_match_is_not_flagged() {
        for domain in TRUSTED_DOMAINS {
            assert!(!is_typosquat(domain), "{domain}");
        }
    }

    #[test]
    fn test_mixed_case_exact_match_is_not_flagged() {
        assert!(!is_typosquat("Google.com"));
    }

    #[test]
    fn test_unrelated_domains_are_not_flagged() {
        assert!(!is_typosquat("example.com"));
        assert!(!is_typosquat("rust-lang.org"));
        assert!(!is_typosquat("mail.google.com"));
        assert!(!is_typosquat("yahoo.com"));
    }

    #[test]
    fn test_custom_trusted_list() {
        assert!(is_typosquat_of("exampel.com", &["example.com"]));
        assert!(!is_typosquat_of("gogle.com", &["example.com"]));
        assert!(!is_typosquat_of("gogle.com", &[]));
    }

    #[test]
    fn test_closest_trusted_domain() {
        assert_eq!(closest_trusted_domain("gogle.com"), Some(("google.com", 1)));
        assert_eq!(closest_trusted_domain("paypal.com"), Some(("paypal.com", 0)));
    }
}
