//! URL string utilities.
//!
//! - Link type detection (external vs internal)
//! - Splitting a link into path and `?query` / `#fragment` suffix

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.md"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a link at the first `?` or `#`, keeping the delimiter in the suffix.
///
/// # Examples
/// ```ignore
/// assert_eq!(split_path_suffix("/docs?v=2#top"), ("/docs", "?v=2#top"));
/// assert_eq!(split_path_suffix("/docs"), ("/docs", ""));
/// ```
#[inline]
pub fn split_path_suffix(url: &str) -> (&str, &str) {
    url.find(['?', '#'])
        .map_or((url, ""), |pos| url.split_at(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
        assert!(!is_external_link(":nope"));
    }

    #[test]
    fn test_split_path_suffix() {
        assert_eq!(split_path_suffix("/docs?v=2#top"), ("/docs", "?v=2#top"));
        assert_eq!(split_path_suffix("/docs#top?x"), ("/docs", "#top?x"));
        assert_eq!(split_path_suffix("intro.md#a"), ("intro.md", "#a"));
        assert_eq!(split_path_suffix("/docs"), ("/docs", ""));
    }
}
