//! Raw config loading: file format detection and parsing into a
//! `serde_json::Value` tree, before any schema check.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigError;

/// Encoding of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::Format(ext)),
        }
    }

    /// Parse `content` into a raw value tree.
    pub fn parse(self, content: &str) -> Result<Value, ConfigError> {
        Ok(match self {
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
        })
    }
}

/// A parsed config file that has not been checked yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawConfig {
    value: Value,
    /// Directory relative file paths are resolved against.
    root: PathBuf,
}

impl RawConfig {
    pub fn new(value: Value, root: impl Into<PathBuf>) -> Self {
        Self {
            value,
            root: root.into(),
        }
    }

    /// Read and parse a config file. The root is the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self::new(format.parse(&content)?, root))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
