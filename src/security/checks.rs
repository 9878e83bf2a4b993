//! Transport and blacklist checks.

/// Returns `true` if the link uses plaintext HTTP.
///
/// This is a literal, case-sensitive prefix test: `HTTP://example.com` does not
/// match.
pub fn is_unencrypted(url: &str) -> bool {
    url.starts_with("http://")
}

/// Returns `true` if any blacklist entry occurs anywhere inside `domain`.
///
/// Matching is by substring, not by label: the entry `evil.com` matches both
/// `evil.com` and `notevil.com.phish.net`. Neither side is case-folded; both are
/// expected to be lower-case already.
pub fn is_blacklisted<S: AsRef<str>>(domain: &str, blacklist: &[S]) -> bool {
    blacklist
        .iter()
        .any(|entry| domain.contains(entry.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unencrypted() {
        assert!(is_unencrypted("http://example.com"));
        assert!(is_unencrypted("http://example.com/login?next=/"));
        assert!(!is_unencrypted("https://example.com"));
        assert!(!is_unencrypted("ftp://example.com"));
        assert!(!is_unencrypted("mailto:test@test.com"));
    }

    #[test]
    fn test_is_unencrypted_is_case_sensitive() {
        assert!(!is_unencrypted("HTTP://example.com"));
        assert!(!is_unencrypted("Http://example.com"));
    }

    #[test]
    fn test_is_blacklisted_exact() {
        assert!(is_blacklisted("evil-phish.com", &["evil-phish.com"]));
    }

    #[test]
    fn test_is_blacklisted_substring_anywhere() {
        let blacklist = ["evil.com"];
        assert!(is_blacklisted("evil.com", &blacklist));
        assert!(is_blacklisted("login.evil.com", &blacklist));
        assert!(is_blacklisted("notevil.com.phish.net", &blacklist));
        assert!(!is_blacklisted("evil.co", &blacklist));
    }

    #[test]
    fn test_is_blacklisted_empty_list() {
        let blacklist: [String; 0] = [];
        assert!(!is_blacklisted("evil.com", &blacklist));
    }

    #[test]
    fn test_is_blacklisted_does_not_fold_case() {
        assert!(!is_blacklisted("evil.com", &["EVIL.com"]));
    }
}
