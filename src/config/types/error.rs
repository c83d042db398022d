//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config format `{0}`, expected .toml, .json, .yaml or .yml")]
    Format(String),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ErrorKind
// ============================================================================

/// Category of a collected config problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A required field is absent.
    MissingField,
    /// A key outside the recognized schema.
    UnknownField,
    /// A value of the wrong type.
    TypeMismatch,
    /// A value of the right type outside the accepted set.
    InvalidValue,
    /// A configured file path does not exist.
    MissingFile,
    /// A theme name not present in the registry.
    UnknownTheme,
    /// A navigation or markdown reference with no target.
    BrokenLink,
}

impl ErrorKind {
    /// Get kind label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MissingField => "missing field",
            Self::UnknownField => "unknown field",
            Self::TypeMismatch => "type mismatch",
            Self::InvalidValue => "invalid value",
            Self::MissingFile => "missing file",
            Self::UnknownTheme => "unknown theme",
            Self::BrokenLink => "broken link",
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigDiagnostic {
    pub kind: ErrorKind,
    /// Config field path (e.g., "themeConfig.navbar.items[0].to")
    #[serde(rename = "path")]
    pub field: FieldPath,
    /// Error detail. For broken links and unknown themes this is the
    /// offending target or name itself.
    #[serde(rename = "detail")]
    pub message: String,
    /// Fix hint (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: ErrorKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.field.is_root() {
            "<root>"
        } else {
            self.field.as_str()
        };
        // Field path in cyan brackets, kind dimmed
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            path.cyan(),
            "]".dimmed(),
            self.kind.label().dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Collected diagnostics from one or more stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: ErrorKind, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(kind, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        kind: ErrorKind,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(kind, field, message).with_hint(hint));
    }

    pub fn push(&mut self, diagnostic: ConfigDiagnostic) {
        self.errors.push(diagnostic);
    }

    /// Move all errors of `other` into `self`, keeping order.
    pub fn extend(&mut self, other: ConfigDiagnostics) {
        self.errors.extend(other.errors);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Errors of one kind.
    pub fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ConfigDiagnostic> for ConfigDiagnostics {
    fn from(diagnostic: ConfigDiagnostic) -> Self {
        Self {
            errors: vec![diagnostic],
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind as IoErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docsite.toml"),
            Error::new(IoErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docsite.toml"));

        let format_err = ConfigError::Format("ini".to_string());
        assert!(format!("{format_err}").contains("`ini`"));
    }

    #[test]
    fn test_diagnostics_collect_in_order() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(ErrorKind::MissingField, FieldPath::new("title"), "required");
        diag.error_with_hint(
            ErrorKind::UnknownField,
            FieldPath::new("titel"),
            "unknown key",
            "did you mean `title`?",
        );

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].kind, ErrorKind::MissingField);
        assert_eq!(diag.of_kind(ErrorKind::UnknownField).count(), 1);
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_diagnostic_serializes_as_report_entry() {
        let diag = ConfigDiagnostic::new(
            ErrorKind::BrokenLink,
            FieldPath::new("themeConfig.navbar.items[0]"),
            "/missing",
        );
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "BrokenLink");
        assert_eq!(json["path"], "themeConfig.navbar.items[0]");
        assert_eq!(json["detail"], "/missing");
        assert!(json.get("hint").is_none());
    }

    #[test]
    fn test_diagnostics_display_has_no_stage_header() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error(ErrorKind::BrokenLink, FieldPath::new("guide/setup.md"), "./missing.md");
        diag.error(ErrorKind::BrokenLink, FieldPath::new("intro.md"), "./gone.md");
        let display = diag.to_string();
        assert!(display.starts_with("[guide/setup.md] broken link"));
        assert!(!display.contains("validation"));
        assert!(display.ends_with("found 2 errors"));
    }

    #[test]
    fn test_display_mentions_path_and_message() {
        owo_colors::set_override(false);
        let diag = ConfigDiagnostic::new(
            ErrorKind::TypeMismatch,
            FieldPath::new("trailingSlash"),
            "expected boolean, found string",
        )
        .with_hint("use true or false");
        let display = diag.to_string();
        assert!(display.contains("[trailingSlash] type mismatch"));
        assert!(display.contains("expected boolean, found string"));
        assert!(display.contains("hint: use true or false"));
    }
}
