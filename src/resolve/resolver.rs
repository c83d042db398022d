//! Reference resolution against the page inventory.
//!
//! ```text
//! navbar item / footer item
//!   to     ──► external? ──► pass through
//!          ──► #anchor?  ──► pass through
//!          ──► baseUrl + trailingSlash ──► inventory route?
//!   docId  ──► inventory doc route?
//!   href   ──► pass through
//! ```
//!
//! Broken targets are collected and handed to `onBrokenLinks`.

use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};

use super::{BrokenLink, LinkFailurePolicy};
use crate::config::{ConfigDiagnostics, FieldPath, LinkTarget, SiteConfig};
use crate::core::{LinkKind, RouteRules};
use crate::debug;
use crate::page::PageInventory;
use crate::theme::BoundThemes;
use crate::utils::path::route::split_path_suffix;

/// Final configuration: every navigation target resolved or substituted.
///
/// Serializes as the site config only, which is valid config input again.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub site: SiteConfig,
    pub themes: BoundThemes,
    /// One entry per navbar and footer item, in config order.
    pub references: Vec<ResolvedReference>,
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.site.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// e.g. `themeConfig.navbar.items[1]`
    pub field: FieldPath,
    /// Target as written back into the resolved site.
    pub target: LinkTarget,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A site route and its absolute URL.
    Route { route: String, url: String },
    /// An external URL, untouched.
    External(String),
    /// A fragment on the current page, untouched.
    Anchor(String),
    /// Broken target replaced by [`LinkFailurePolicy::PLACEHOLDER`].
    Placeholder,
}

impl Resolution {
    /// The href a renderer would emit.
    pub fn href(&self) -> &str {
        match self {
            Self::Route { route, .. } => route,
            Self::External(href) | Self::Anchor(href) => href,
            Self::Placeholder => LinkFailurePolicy::PLACEHOLDER,
        }
    }
}

enum Outcome {
    /// Resolved; `Some` when the configured target is rewritten.
    Resolved(Resolution, Option<LinkTarget>),
    Broken(String),
}

struct Resolver<'a> {
    site: &'a SiteConfig,
    inventory: &'a PageInventory,
    rules: RouteRules<'a>,
    /// Inventory routes under the site's trailing slash rule.
    routes: FxHashSet<String>,
}

impl<'a> Resolver<'a> {
    fn new(site: &'a SiteConfig, inventory: &'a PageInventory) -> Self {
        let rules = RouteRules::new(&site.base_url, site.trailing_slash);
        let routes = inventory
            .routes()
            .map(|route| rules.apply_trailing_slash(route.to_string()))
            .collect();
        Self {
            site,
            inventory,
            rules,
            routes,
        }
    }

    fn resolve(&self, target: &LinkTarget) -> Outcome {
        match target {
            LinkTarget::Route(to) => self.resolve_route(to),
            LinkTarget::Doc(id) => match self.inventory.doc_route(id) {
                Some(route) => {
                    let route = self.rules.apply_trailing_slash(route.to_string());
                    Outcome::Resolved(self.route(route), None)
                }
                None => Outcome::Broken(format!("no doc with id `{id}` in the inventory")),
            },
            LinkTarget::External(href) => Outcome::Resolved(Resolution::External(href.clone()), None),
        }
    }

    fn resolve_route(&self, to: &str) -> Outcome {
        if to == LinkFailurePolicy::PLACEHOLDER {
            return Outcome::Resolved(Resolution::Placeholder, None);
        }
        match LinkKind::parse(to) {
            LinkKind::External(href) => Outcome::Resolved(Resolution::External(href.to_string()), None),
            LinkKind::Fragment(_) => Outcome::Resolved(Resolution::Anchor(to.to_string()), None),
            LinkKind::SiteRoot(_) | LinkKind::Relative(_) => {
                let (path, suffix) = split_path_suffix(to);
                let route = self.rules.route(path);
                if self.routes.contains(&route) {
                    let rewritten = LinkTarget::Route(format!("{route}{suffix}"));
                    Outcome::Resolved(self.route(route), Some(rewritten))
                } else {
                    Outcome::Broken(format!("no page at `{route}`"))
                }
            }
        }
    }

    fn route(&self, route: String) -> Resolution {
        let url = self
            .site
            .absolute_url(&route)
            .unwrap_or_else(|| format!("{}{}", self.site.url.trim_end_matches('/'), route));
        Resolution::Route { route, url }
    }
}

/// Resolve every navbar and footer target of `site`.
///
/// Also checks configured files. Broken links and missing files are
/// reported together.
pub fn resolve(
    site: &SiteConfig,
    themes: &BoundThemes,
    inventory: &PageInventory,
) -> Result<ResolvedConfig, ConfigDiagnostics> {
    let resolver = Resolver::new(site, inventory);
    let substitute = site.on_broken_links != LinkFailurePolicy::Throw;
    let mut resolved = site.clone();
    let mut references = Vec::new();
    let mut broken = Vec::new();

    let mut visit = |field: FieldPath, target: &mut LinkTarget, label: Option<&mut Option<String>>| {
        let resolution = match resolver.resolve(target) {
            Outcome::Resolved(resolution, rewritten) => {
                if let Some(rewritten) = rewritten {
                    *target = rewritten;
                }
                resolution
            }
            Outcome::Broken(hint) => {
                broken.push(BrokenLink::new(field.clone(), target.value()).with_hint(hint));
                if substitute {
                    if let Some(label) = label
                        && label.is_none()
                    {
                        *label = Some(target.value().to_string());
                    }
                    *target = LinkTarget::Route(LinkFailurePolicy::PLACEHOLDER.to_string());
                }
                Resolution::Placeholder
            }
        };
        references.push(ResolvedReference {
            field,
            target: target.clone(),
            resolution,
        });
    };

    let theme = FieldPath::root().key("themeConfig");
    let nav_items = theme.key("navbar").key("items");
    for (i, item) in resolved.theme_config.navbar.items.iter_mut().enumerate() {
        visit(nav_items.index(i), &mut item.target, Some(&mut item.label));
    }
    let columns = theme.key("footer").key("links");
    for (i, column) in resolved.theme_config.footer.links.iter_mut().enumerate() {
        let items = columns.index(i).key("items");
        for (j, item) in column.items.iter_mut().enumerate() {
            visit(items.index(j), &mut item.target, None);
        }
    }

    debug!("resolve"; "{} references, {} broken", references.len(), broken.len());

    let mut diag = ConfigDiagnostics::new();
    if let Err(errors) = site.on_broken_links.apply("navigation", &broken) {
        diag.extend(errors);
    }
    diag.extend(site.check_files());
    diag.into_result()?;

    Ok(ResolvedConfig {
        site: resolved,
        themes: themes.clone(),
        references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ErrorKind, SITE_SCHEMA, builtin_defaults, validate};
    use crate::theme::{ThemeRegistry, bind};
    use serde_json::{Value, json};
    use std::path::Path;

    fn site(value: Value) -> SiteConfig {
        let layer = validate(&value, &SITE_SCHEMA).unwrap();
        SiteConfig::from_layer(layer.merge_over(&builtin_defaults()), Path::new("/site")).unwrap()
    }

    fn themes() -> BoundThemes {
        bind(&ThemeRegistry::with_builtins(), "github", None).unwrap()
    }

    fn with_nav(items: Value, extra: Value) -> SiteConfig {
        let mut value = json!({
            "title": "x",
            "url": "https://parpy-lib.github.io",
            "baseUrl": "/",
            "themeConfig": { "navbar": { "items": items } },
        });
        if let (Some(map), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            map.extend(extra.clone());
        }
        site(value)
    }

    #[test]
    fn test_doc_link_resolves_to_route() {
        let inventory = PageInventory::builder()
            .route("/docs/intro")
            .doc("root", "/docs/intro")
            .build();
        let config = with_nav(json!([{ "type": "doc", "docId": "root" }]), json!({}));

        let resolved = resolve(&config, &themes(), &inventory).unwrap();
        assert_eq!(
            resolved.references[0].resolution,
            Resolution::Route {
                route: "/docs/intro".into(),
                url: "https://parpy-lib.github.io/docs/intro".into()
            }
        );
        assert_eq!(
            resolved.site.theme_config.navbar.items[0].target,
            LinkTarget::Doc("root".into())
        );
    }

    #[test]
    fn test_missing_route_throws() {
        let inventory = PageInventory::default();
        let config = with_nav(json!([{ "to": "/missing", "label": "Missing" }]), json!({}));

        let diag = resolve(&config, &themes(), &inventory).unwrap_err();
        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.kind, ErrorKind::BrokenLink);
        assert_eq!(err.field.as_str(), "themeConfig.navbar.items[0]");
        assert_eq!(err.message, "/missing");
    }

    #[test]
    fn test_every_broken_link_reported() {
        let config = site(json!({
            "title": "x",
            "url": "https://parpy-lib.github.io",
            "baseUrl": "/",
            "themeConfig": {
                "navbar": { "items": [
                    { "to": "/a", "label": "A" },
                    { "docId": "gone" },
                    { "href": "https://github.com/parpy-lib/", "label": "GitHub" },
                ] },
                "footer": { "links": [{ "title": "t", "items": [{ "label": "B", "to": "/b" }] }] },
            },
        }));
        let diag = resolve(&config, &themes(), &PageInventory::default()).unwrap_err();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "themeConfig.navbar.items[0]",
                "themeConfig.navbar.items[1]",
                "themeConfig.footer.links[0].items[0]",
            ]
        );
    }

    #[test]
    fn test_warn_substitutes_placeholder() {
        let config = with_nav(
            json!([{ "docId": "gone" }, { "to": "installation", "label": "Install" }]),
            json!({ "onBrokenLinks": "warn" }),
        );
        let inventory = PageInventory::builder().route("/installation").build();

        let resolved = resolve(&config, &themes(), &inventory).unwrap();
        let items = &resolved.site.theme_config.navbar.items;
        assert_eq!(items[0].target, LinkTarget::Route("#".into()));
        assert_eq!(items[0].label.as_deref(), Some("gone"));
        assert_eq!(resolved.references[0].resolution, Resolution::Placeholder);
        assert_eq!(items[1].target, LinkTarget::Route("/installation".into()));
    }

    #[test]
    fn test_passthrough_targets() {
        let config = with_nav(
            json!([
                { "href": "https://github.com/parpy-lib/", "label": "GitHub" },
                { "to": "mailto:team@parpy.dev", "label": "Mail" },
                { "to": "#top", "label": "Top" },
            ]),
            json!({}),
        );
        let resolved = resolve(&config, &themes(), &PageInventory::default()).unwrap();
        let hrefs: Vec<_> = resolved.references.iter().map(|r| r.resolution.href()).collect();
        assert_eq!(hrefs, ["https://github.com/parpy-lib/", "mailto:team@parpy.dev", "#top"]);
    }

    #[test]
    fn test_trailing_slash_and_suffix() {
        let config = with_nav(
            json!([{ "to": "/docs/tutorials/#gpu", "label": "GPU" }]),
            json!({ "trailingSlash": false }),
        );
        let inventory = PageInventory::builder().route("/docs/tutorials/").build();

        let resolved = resolve(&config, &themes(), &inventory).unwrap();
        assert_eq!(
            resolved.site.theme_config.navbar.items[0].target,
            LinkTarget::Route("/docs/tutorials#gpu".into())
        );
        assert_eq!(resolved.references[0].resolution.href(), "/docs/tutorials");
    }

    #[test]
    fn test_base_url_prefix() {
        let config = with_nav(
            json!([{ "to": "/docs/intro", "label": "Intro" }, { "to": "/parpy/docs/intro", "label": "Again" }]),
            json!({ "baseUrl": "/parpy/" }),
        );
        let inventory = PageInventory::builder().route("/parpy/docs/intro").build();

        let resolved = resolve(&config, &themes(), &inventory).unwrap();
        for reference in &resolved.references {
            assert_eq!(
                reference.resolution,
                Resolution::Route {
                    route: "/parpy/docs/intro".into(),
                    url: "https://parpy-lib.github.io/parpy/docs/intro".into()
                }
            );
        }
    }

    #[test]
    fn test_missing_files_reported_with_links() {
        let mut config = with_nav(json!([{ "to": "/missing", "label": "M" }]), json!({}));
        config.presets = serde_json::from_value(json!([["classic", { "theme": { "customCss": "/nonexistent/custom.css" } }]]))
            .unwrap();

        let diag = resolve(&config, &themes(), &PageInventory::default()).unwrap_err();
        let kinds: Vec<_> = diag.errors().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ErrorKind::BrokenLink, ErrorKind::MissingFile]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let inventory = PageInventory::builder()
            .route("/installation")
            .doc("root", "/docs/intro")
            .build();
        for policy in ["throw", "warn", "ignore"] {
            let mut items = vec![
                json!({ "to": "./installation", "label": "Installation" }),
                json!({ "type": "doc", "docId": "root" }),
                json!({ "href": "https://github.com/parpy-lib/", "label": "GitHub" }),
            ];
            if policy != "throw" {
                items.push(json!({ "docId": "missing" }));
            }
            let config = with_nav(
                Value::Array(items),
                json!({ "onBrokenLinks": policy, "trailingSlash": true }),
            );

            let once = resolve(&config, &themes(), &inventory).unwrap();
            let twice = resolve(&once.site, &themes(), &inventory).unwrap();
            assert_eq!(once, twice, "{policy}");
            assert_eq!(
                once.references[0].target,
                LinkTarget::Route("/installation/".into())
            );
        }
    }

    #[test]
    fn test_placeholder_resolves_as_placeholder() {
        let config = with_nav(json!([{ "to": "#", "label": "Soon" }]), json!({}));
        let resolved = resolve(&config, &themes(), &PageInventory::default()).unwrap();
        assert_eq!(resolved.references[0].resolution, Resolution::Placeholder);
    }

    #[test]
    fn test_dot_segments_resolve() {
        let config = with_nav(
            json!([
                { "to": "./installation", "label": "A" },
                { "to": "docs/../installation", "label": "B" },
            ]),
            json!({}),
        );
        let inventory = PageInventory::builder().route("/installation").build();

        let resolved = resolve(&config, &themes(), &inventory).unwrap();
        for item in &resolved.site.theme_config.navbar.items {
            assert_eq!(item.target, LinkTarget::Route("/installation".into()));
        }
    }

    #[test]
    fn test_doc_route_under_base_url_with_trailing_slash() {
        let config = with_nav(
            json!([{ "type": "doc", "docId": "root" }]),
            json!({ "baseUrl": "/parpy/", "trailingSlash": true }),
        );
        let inventory = PageInventory::builder()
            .doc("root", "/parpy/docs/intro")
            .build();

        let resolved = resolve(&config, &themes(), &inventory).unwrap();
        assert_eq!(
            resolved.references[0].resolution,
            Resolution::Route {
                route: "/parpy/docs/intro/".into(),
                url: "https://parpy-lib.github.io/parpy/docs/intro/".into()
            }
        );
    }
}
