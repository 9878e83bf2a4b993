//! Link input parsing.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Splits input text into links, skipping blank lines and `#` comments.
pub fn parse_link_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads links from `path`, or from stdin when `path` is `-`.
pub fn read_link_lines(path: &Path) -> Result<Vec<String>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read links from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read links from {}", path.display()))?
    };
    Ok(parse_link_lines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_comments_and_blanks() {
        let text = "# header\nhttps://example.com\n\n   \n  # indented comment\n\thttp://gogle.com  \n";
        assert_eq!(
            parse_link_lines(text),
            vec!["https://example.com", "http://gogle.com"]
        );
    }

    #[test]
    fn test_keeps_fragments_after_hash() {
        assert_eq!(
            parse_link_lines("https://example.com/#section"),
            vec!["https://example.com/#section"]
        );
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = read_link_lines(Path::new("/nonexistent/links.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/links.txt"));
    }
}
