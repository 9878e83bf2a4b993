//! Domain extraction and normalization utilities.
//!
//! Turns the `href` of a link into the host string the classifier works on:
//! lower-cased, with a single leading `www.` removed. Other subdomains are kept,
//! so `mail.google.com` stays `mail.google.com`.

use log::trace;

/// Extracts the normalized host from a URL.
///
/// # Arguments
///
/// * `url` - The URL to extract the host from
///
/// # Returns
///
/// `Some(host)` (e.g., "google.com" from "https://www.google.com/search?q=test"),
/// or `None` when the string does not parse as a URL or has no host
/// (e.g., "mailto:test@test.com"). Failure is never an error: the caller simply
/// skips classification for that link.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = match url::Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            trace!("No domain for {url}: {e}");
            return None;
        }
    };

    let host = parsed.host_str()?.to_lowercase();
    if host.is_empty() {
        return None;
    }

    Some(match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
