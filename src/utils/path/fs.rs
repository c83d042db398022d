//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + lexical fallback)
//! - `resolve_path` - resolve relative paths against a base directory
//! - `clean_path` - lexical `.` / `..` removal, no file system access

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to a lexically cleaned path, joined with the current
/// directory when relative.
///
/// # Example
/// ```ignore
/// let abs = normalize_path(Path::new("./docs/intro.md"));
/// ```
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            clean_path(path)
        } else {
            std::env::current_dir()
                .map_or_else(|_| clean_path(path), |cwd| clean_path(&cwd.join(path)))
        }
    })
}

/// Resolve `path` against `base_dir`, returning an absolute path.
///
/// Absolute inputs are kept (cleaned). Resolving an already resolved path
/// returns it unchanged.
///
/// # Example
/// ```ignore
/// // sidebarPath = "./sidebars.js" in /site/docsite.toml
/// resolve_path(Path::new("./sidebars.js"), Path::new("/site")) // -> /site/sidebars.js
/// ```
#[inline]
pub fn resolve_path(path: &Path, base_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }
    normalize_path(&base_dir.join(path))
}

/// Remove `.` and `..` components without touching the file system.
///
/// A `..` that would climb above the start of a relative path is kept; above
/// the root of an absolute path it is dropped.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}
