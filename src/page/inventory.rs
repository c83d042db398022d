//! The page inventory: every route the content pipeline produced, plus the
//! doc id → route table.
//!
//! Built once through [`PageInventoryBuilder`] and read-only afterwards.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::ConfigError;
use crate::core::decode;

/// Finished set of routes and doc ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInventory {
    routes: FxHashSet<String>,
    docs: FxHashMap<String, String>,
}

/// On-disk inventory: `{"routes": [...], "docs": {"<docId>": "<route>"}}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InventoryFile {
    #[serde(default)]
    routes: Vec<String>,
    #[serde(default)]
    docs: FxHashMap<String, String>,
}

impl PageInventory {
    pub fn builder() -> PageInventoryBuilder {
        PageInventoryBuilder::default()
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let file: InventoryFile = serde_json::from_str(content)?;
        let mut builder = Self::builder();
        for route in file.routes {
            builder = builder.route(route);
        }
        for (id, route) in file.docs {
            builder = builder.doc(id, route);
        }
        Ok(builder.build())
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_json(&content)
    }

    /// Route of a doc id.
    #[inline]
    pub fn doc_route(&self, doc_id: &str) -> Option<&str> {
        self.docs.get(doc_id).map(String::as_str)
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }
}

/// Collects routes and docs; [`build`](Self::build) freezes them.
#[derive(Debug, Default)]
pub struct PageInventoryBuilder {
    routes: Vec<String>,
    docs: Vec<(String, String)>,
}

impl PageInventoryBuilder {
    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.routes.push(route.into());
        self
    }

    /// Register a doc. Its route becomes a valid route as well.
    pub fn doc(mut self, id: impl Into<String>, route: impl Into<String>) -> Self {
        self.docs.push((id.into(), route.into()));
        self
    }

    pub fn build(self) -> PageInventory {
        let mut routes: FxHashSet<String> = self.routes.iter().map(|r| decode(r)).collect();
        let docs: FxHashMap<String, String> = self
            .docs
            .into_iter()
            .map(|(id, route)| (id, decode(&route)))
            .collect();
        routes.extend(docs.values().cloned());
        PageInventory { routes, docs }
    }
}
