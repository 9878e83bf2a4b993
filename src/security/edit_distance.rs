//! Levenshtein edit distance.

/// Computes the Levenshtein distance between two strings.
///
/// The distance is the minimum number of single-character insertions,
/// deletions, or substitutions needed to turn one string into the other. Both
/// inputs are lower-cased first, so callers may pass mixed case.
///
/// Only a single cost row is kept, sized to the shorter input, and the
/// diagonal cell of the previous row is carried in a local.
///
/// # Examples
///
/// ```
/// use safelink::security::levenshtein;
///
/// assert_eq!(levenshtein("google.com", "gogle.com"), 1);
/// assert_eq!(levenshtein("Google.com", "google.com"), 0);
/// ```
pub fn levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.to_lowercase().chars().collect();
    let b: Vec<char> = s2.to_lowercase().chars().collect();

    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    // costs[j] holds the distance between the processed prefix of `outer` and inner[..j]
    let mut costs: Vec<usize> = (0..=inner.len()).collect();

    for (i, outer_char) in outer.iter().enumerate() {
        let mut diagonal = costs[0];
        costs[0] = i + 1;
        for (j, inner_char) in inner.iter().enumerate() {
            let above = costs[j + 1];
            costs[j + 1] = if outer_char == inner_char {
                diagonal
            } else {
                1 + diagonal.min(above).min(costs[j])
            };
            diagonal = above;
        }
    }

    costs[inner.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TRUSTED_DOMAINS;

    #[test]
    fn test_identity_is_zero() {
        for domain in TRUSTED_DOMAINS {
            assert_eq!(levenshtein(domain, domain), 0, "{domain}");
        }
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein("google.com", "gogle.com"), 1);
        assert_eq!(levenshtein("amazon.com", "amaz0n.com"), 1);
        assert_eq!(levenshtein("paypal.com", "paypa1.com"), 1);
        assert_eq!(levenshtein("google.com", "facebook.com"), 8);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(levenshtein("Google.com", "google.com"), 0);
        assert_eq!(levenshtein("PAYPAL.COM", "paypa1.com"), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("google.com", "facebook.com"),
            ("faceboook.com", "facebook.com"),
            ("a", "abcdef"),
            ("wikipedia.org", "wiki.org"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let words = ["google.com", "gogle.com", "g00gle.com", "facebook.com", ""];
        for a in words {
            for b in words {
                for c in words {
                    assert!(levenshtein(a, c) <= levenshtein(a, b) + levenshtein(b, c));
                }
            }
        }
    }

    #[test]
    fn test_bounded_by_longer_length() {
        assert_eq!(levenshtein("abc", "xyz"), 3);
        assert!(levenshtein("short", "a-much-longer-string") <= "a-much-longer-string".len());
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        // Cyrillic 'а' in place of Latin 'a' is a single substitution
        assert_eq!(levenshtein("pаypal.com", "paypal.com"), 1);
    }
}
