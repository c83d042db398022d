//! Inventory from the docs directory, for runs without a content pipeline.

use super::PageInventory;
use crate::config::SiteConfig;
use crate::markdown::{collect_markdown_files, doc_id};

impl PageInventory {
    /// Build an inventory with one route per docs source file.
    ///
    /// `guide/setup.md` under route base `docs` becomes doc `guide/setup` at
    /// `{baseUrl}docs/guide/setup`; `index` files map to their directory.
    pub fn scan_docs(config: &SiteConfig) -> Self {
        let mut builder = Self::builder().route(config.base_url.clone());
        let Some(docs) = config.docs() else {
            return builder.build();
        };

        let base = docs_base(&config.base_url, &docs.route_base_path);
        for file in collect_markdown_files(&docs.path) {
            let relative = file.strip_prefix(&docs.path).unwrap_or(&file);
            let id = doc_id(relative);
            let route = doc_route(&base, &id);
            builder = builder.doc(id, route);
        }
        builder.build()
    }
}

fn docs_base(base_url: &str, route_base_path: &str) -> String {
    match route_base_path.trim_matches('/') {
        "" => base_url.to_string(),
        route_base => format!("{base_url}{route_base}/"),
    }
}

fn doc_route(base: &str, id: &str) -> String {
    let page = id
        .strip_suffix("index")
        .filter(|rest| rest.is_empty() || rest.ends_with('/'))
        .unwrap_or(id);
    match page.trim_end_matches('/') {
        "" => match base.trim_end_matches('/') {
            "" => "/".to_string(),
            dir => dir.to_string(),
        },
        page => format!("{base}{page}"),
    }
}
