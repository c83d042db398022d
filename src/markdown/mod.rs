//! Markdown link checker.
//!
//! Scans docs sources for links to other markdown files
//! (`[setup](./guide/setup.md#install)`), maps each to a doc id and looks
//! it up in the page inventory. Results go through `onBrokenMarkdownLinks`.
//!
//! Only `.md` / `.mdx` links are checked; external, fragment-only and route
//! links are left to the reference resolver or the browser.

use jwalk::WalkDir;
use pulldown_cmark::{Event, Options, Parser, Tag};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::{ConfigError, FieldPath, SiteConfig};
use crate::core::{LinkKind, decode};
use crate::page::PageInventory;
use crate::resolve::BrokenLink;
use crate::utils::path::clean_path;
use crate::utils::path::route::split_path_suffix;
use crate::utils::plural::plural_count;
use crate::{debug, log};

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Outcome of a docs scan that passed the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownReport {
    pub files: usize,
    pub links: usize,
    /// Broken links let through by `warn` / `ignore`.
    pub broken: Vec<BrokenLink>,
}

/// Collect markdown sources below `dir`, sorted for stable output.
pub fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_markdown_source(path))
        .collect();
    files.sort();
    files
}

fn is_markdown_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Doc id of a source path relative to the docs root:
/// `guide/setup.md` → `guide/setup`.
pub fn doc_id(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Link destinations in document order.
pub fn extract_links(content: &str) -> Vec<String> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;
    Parser::new_ext(content, options)
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(dest_url.into_string()),
            _ => None,
        })
        .collect()
}

/// Check one source file.
///
/// `source` is relative to the docs root. Links leaving the docs root are
/// broken.
pub fn check_markdown(source: &Path, content: &str, inventory: &PageInventory) -> Vec<BrokenLink> {
    let field = FieldPath::new(source.to_string_lossy());
    let dir = source.parent().unwrap_or(Path::new(""));

    extract_links(content)
        .into_iter()
        .filter(|link| LinkKind::is_markdown_file(link))
        .filter_map(|link| {
            let (path, _) = split_path_suffix(&link);
            let path = decode(path);
            let target = match LinkKind::parse(&path) {
                LinkKind::SiteRoot(rooted) => clean_path(Path::new(rooted.trim_start_matches('/'))),
                _ => clean_path(&dir.join(&path)),
            };

            if matches!(target.components().next(), Some(Component::ParentDir)) {
                return Some(
                    BrokenLink::new(field.clone(), &link).with_hint("link leaves the docs directory"),
                );
            }
            let id = doc_id(&target);
            inventory
                .doc_route(&id)
                .is_none()
                .then(|| BrokenLink::new(field.clone(), &link).with_hint(format!("no doc with id `{id}`")))
        })
        .collect()
}

/// Scan the docs directory of `config` and apply `onBrokenMarkdownLinks`.
pub fn check_docs(config: &SiteConfig, inventory: &PageInventory) -> Result<MarkdownReport, ConfigError> {
    let Some(docs) = config.docs() else {
        debug!("markdown"; "docs disabled, nothing to scan");
        return Ok(MarkdownReport::default());
    };
    check_files(config, &collect_markdown_files(&docs.path), inventory)
}

/// Check the given sources and apply `onBrokenMarkdownLinks`.
///
/// Paths are taken relative to the docs directory; files outside it are
/// checked as if they sat at its root.
pub fn check_files(
    config: &SiteConfig,
    files: &[PathBuf],
    inventory: &PageInventory,
) -> Result<MarkdownReport, ConfigError> {
    let docs_root = config.docs().map(|docs| docs.path.as_path());

    let mut report = MarkdownReport::default();
    for file in files {
        let content = fs::read_to_string(file).map_err(|e| ConfigError::Io(file.clone(), e))?;
        let relative = docs_root
            .and_then(|root| file.strip_prefix(root).ok())
            .or_else(|| file.file_name().map(Path::new))
            .unwrap_or(file);
        report.files += 1;
        report.links += extract_links(&content).len();
        report.broken.extend(check_markdown(relative, &content, inventory));
    }
    debug!(
        "markdown";
        "scanned {} with {}",
        plural_count(report.files, "file"),
        plural_count(report.links, "link")
    );

    config
        .on_broken_markdown_links
        .apply("markdown", &report.broken)
        .map_err(ConfigError::Diagnostics)?;
    if report.broken.is_empty() {
        log!("ok"; "no broken markdown links in {}", plural_count(report.files, "file"));
    }
    Ok(report)
}
