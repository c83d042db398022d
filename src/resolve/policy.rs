//! The shared throw / warn / ignore policy for broken links.
//!
//! Applied by the reference resolver (`onBrokenLinks`) and by the markdown
//! link checker (`onBrokenMarkdownLinks`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{ConfigDiagnostic, ConfigDiagnostics, ErrorKind, FieldPath};
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// What to do with a reference that has no target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkFailurePolicy {
    /// Substitute the placeholder route silently.
    Ignore,
    /// Log a warning and substitute the placeholder route.
    Warn,
    /// Reject with every broken link.
    #[default]
    Throw,
}

impl LinkFailurePolicy {
    /// Raw names, in schema order.
    pub const NAMES: &'static [&'static str] = &["ignore", "warn", "throw"];

    /// Route substituted for broken targets under `warn` and `ignore`.
    pub const PLACEHOLDER: &'static str = "#";

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        }
    }

    /// Apply the policy to the broken links found in `scope`.
    ///
    /// Returns `Err` with one `BrokenLink` diagnostic per link under
    /// `throw`; otherwise the caller substitutes [`Self::PLACEHOLDER`].
    pub fn apply(self, scope: &str, broken: &[BrokenLink]) -> Result<(), ConfigDiagnostics> {
        if broken.is_empty() {
            return Ok(());
        }
        match self {
            Self::Throw => {
                let mut diag = ConfigDiagnostics::new();
                for link in broken {
                    diag.push(link.to_diagnostic());
                }
                Err(diag)
            }
            Self::Warn => {
                log!("warning"; "{}: {}", scope, plural_count(broken.len(), "broken link"));
                for link in broken {
                    log!("warning"; "{} → {}", link.field, link.target);
                }
                Ok(())
            }
            Self::Ignore => {
                debug!(scope; "ignoring {}", plural_count(broken.len(), "broken link"));
                Ok(())
            }
        }
    }
}

impl fmt::Display for LinkFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A reference whose target does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Where the reference was found, e.g. `themeConfig.navbar.items[0]`
    /// or `docs/guide.md`.
    pub field: FieldPath,
    /// The target as written.
    pub target: String,
    pub hint: Option<String>,
}

impl BrokenLink {
    pub fn new(field: FieldPath, target: impl Into<String>) -> Self {
        Self {
            field,
            target: target.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn to_diagnostic(&self) -> ConfigDiagnostic {
        let diag = ConfigDiagnostic::new(ErrorKind::BrokenLink, self.field.clone(), &self.target);
        match &self.hint {
            Some(hint) => diag.with_hint(hint),
            None => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken() -> Vec<BrokenLink> {
        vec![
            BrokenLink::new(FieldPath::new("themeConfig.navbar.items[0]"), "/missing"),
            BrokenLink::new(FieldPath::new("themeConfig.footer.links[0].items[1]"), "/gone")
                .with_hint("no such route"),
        ]
    }

    #[test]
    fn test_throw_reports_every_link() {
        let diag = LinkFailurePolicy::Throw.apply("navigation", &broken()).unwrap_err();
        assert_eq!(diag.len(), 2);
        assert!(diag.errors().iter().all(|e| e.kind == ErrorKind::BrokenLink));
        assert_eq!(diag.errors()[0].message, "/missing");
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("no such route"));
    }

    #[test]
    fn test_warn_and_ignore_pass() {
        assert!(LinkFailurePolicy::Warn.apply("navigation", &broken()).is_ok());
        assert!(LinkFailurePolicy::Ignore.apply("navigation", &broken()).is_ok());
        assert!(LinkFailurePolicy::Throw.apply("navigation", &[]).is_ok());
    }

    #[test]
    fn test_names_match_serde() {
        for (policy, name) in [
            LinkFailurePolicy::Ignore,
            LinkFailurePolicy::Warn,
            LinkFailurePolicy::Throw,
        ]
        .into_iter()
        .zip(LinkFailurePolicy::NAMES)
        {
            assert_eq!(serde_json::to_value(policy).unwrap(), *name);
            assert_eq!(policy.to_string(), *name);
        }
    }
}
