//! Link classification utilities.

use crate::utils::path::route::{is_external_link, split_path_suffix};

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /docs/intro).
    SiteRoot(&'a str),
    /// Relative path (installation, ./intro.md, ../other).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if let Some(anchor) = link.strip_prefix("./#") {
            // ./#fragment is the current page anchor
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }

    /// Check if a link points at a markdown source file (`.md` / `.mdx`),
    /// ignoring any query or fragment.
    #[inline]
    pub fn is_markdown_file(link: &str) -> bool {
        if is_external_link(link) {
            return false;
        }
        let (path, _) = split_path_suffix(link);
        path.ends_with(".md") || path.ends_with(".mdx")
    }
}
