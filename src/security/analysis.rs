//! Link classification.
//!
//! Checks run in a fixed priority order and the first one that fires decides
//! the reason. Disabling a check removes it from the sequence without
//! reordering the others.

use super::checks::{is_blacklisted, is_unencrypted};
use super::typosquat::is_typosquat;
use super::{Classification, Reason};
use crate::settings::{CheckKind, Settings};

/// Everything a single check may look at.
struct LinkInput<'a> {
    url: &'a str,
    domain: &'a str,
    blacklist: &'a [String],
}

struct LinkCheck {
    kind: CheckKind,
    reason: Reason,
    triggered: fn(&LinkInput<'_>) -> bool,
}

fn transport_check(input: &LinkInput<'_>) -> bool {
    is_unencrypted(input.url)
}

fn blacklist_check(input: &LinkInput<'_>) -> bool {
    is_blacklisted(input.domain, input.blacklist)
}

fn imposter_check(input: &LinkInput<'_>) -> bool {
    is_typosquat(input.domain)
}

/// Checks in priority order.
const LINK_CHECKS: &[LinkCheck] = &[
    LinkCheck {
        kind: CheckKind::Http,
        reason: Reason::Unencrypted,
        triggered: transport_check,
    },
    LinkCheck {
        kind: CheckKind::Blacklist,
        reason: Reason::Blacklisted,
        triggered: blacklist_check,
    },
    LinkCheck {
        kind: CheckKind::Imposter,
        reason: Reason::Imposter,
        triggered: imposter_check,
    },
];

/// Classifies a link.
///
/// # Arguments
///
/// * `url` - The full link target, used by the transport check
/// * `domain` - The normalized host from [`extract_domain`](crate::domain::extract_domain)
/// * `blacklist` - Blacklisted domain fragments (lower-case)
/// * `settings` - Enabled checks; `None` enables all of them
///
/// # Returns
///
/// [`Classification::Unsafe`] with the reason of the first enabled check that
/// fires (transport, then blacklist, then imposter), or
/// [`Classification::Safe`].
///
/// Callers only invoke this when a domain could be extracted.
pub fn classify(
    url: &str,
    domain: &str,
    blacklist: &[String],
    settings: Option<Settings>,
) -> Classification {
    let settings = settings.unwrap_or_default();
    let input = LinkInput {
        url,
        domain,
        blacklist,
    };

    LINK_CHECKS
        .iter()
        .find(|check| settings.is_enabled(check.kind) && (check.triggered)(&input))
        .map_or(Classification::Safe, |check| {
            Classification::Unsafe(check.reason)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blacklist(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_http_wins() {
        let result = classify("http://example.com", "example.com", &[], None);
        assert_eq!(result, Classification::Unsafe(Reason::Unencrypted));
    }

    #[test]
    fn test_http_wins_over_blacklist_and_imposter() {
        let list = blacklist(&["gogle.com"]);
        let result = classify("http://gogle.com", "gogle.com", &list, None);
        assert_eq!(result, Classification::Unsafe(Reason::Unencrypted));
    }

    #[test]
    fn test_blacklisted() {
        let list = blacklist(&["evil-phish.com"]);
        let result = classify(
            "https://evil-phish.com",
            "evil-phish.com",
            &list,
            Some(Settings::default()),
        );
        assert_eq!(result, Classification::Unsafe(Reason::Blacklisted));
    }

    #[test]
    fn test_blacklist_wins_over_imposter() {
        let list = blacklist(&["gogle"]);
        let result = classify("https://gogle.com", "gogle.com", &list, None);
        assert_eq!(result, Classification::Unsafe(Reason::Blacklisted));
    }

    #[test]
    fn test_imposter() {
        let result = classify("https://faceboook.com", "faceboook.com", &[], None);
        assert_eq!(result, Classification::Unsafe(Reason::Imposter));
    }

    #[test]
    fn test_safe() {
        let result = classify("https://google.com", "google.com", &[], None);
        assert_eq!(result, Classification::Safe);
        assert_eq!(result.reason(), None);
    }

    #[test]
    fn test_disabled_checks_are_skipped_not_reordered() {
        let list = blacklist(&["gogle.com"]);
        let mut settings = Settings::default();

        settings.set(CheckKind::Http, false);
        assert_eq!(
            classify("http://gogle.com", "gogle.com", &list, Some(settings)),
            Classification::Unsafe(Reason::Blacklisted)
        );

        settings.set(CheckKind::Blacklist, false);
        assert_eq!(
            classify("http://gogle.com", "gogle.com", &list, Some(settings)),
            Classification::Unsafe(Reason::Imposter)
        );

        settings.set(CheckKind::Imposter, false);
        assert_eq!(
            classify("http://gogle.com", "gogle.com", &list, Some(settings)),
            Classification::Safe
        );
    }

    #[test]
    fn test_all_disabled_is_always_safe() {
        let list = blacklist(&["evil.com"]);
        let settings = Some(Settings::all_disabled());
        for (url, domain) in [
            ("http://evil.com", "evil.com"),
            ("https://gogle.com", "gogle.com"),
            ("http://paypa1.com", "paypa1.com"),
        ] {
            assert_eq!(classify(url, domain, &list, settings), Classification::Safe);
        }
    }

    #[test]
    fn test_uppercase_scheme_is_not_unencrypted() {
        let result = classify("HTTP://example.com", "example.com", &[], None);
        assert_eq!(result, Classification::Safe);
    }
}
