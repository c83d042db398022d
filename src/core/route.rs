//! Route normalization under `baseUrl` and `trailingSlash`.
//!
//! - Internal representation: always decoded (human-readable)
//! - Every normalized route starts with `baseUrl`

use percent_encoding::percent_decode_str;

/// Rules that turn a link path into a site route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRules<'a> {
    /// Path prefix, always starting and ending with `/`.
    base_url: &'a str,
    /// `Some(true)` adds a trailing slash, `Some(false)` strips it, `None`
    /// leaves routes as written.
    trailing_slash: Option<bool>,
}

impl<'a> RouteRules<'a> {
    pub fn new(base_url: &'a str, trailing_slash: Option<bool>) -> Self {
        Self {
            base_url,
            trailing_slash,
        }
    }

    /// Join a link path (no query or fragment) with `baseUrl` and apply the
    /// trailing slash rule.
    ///
    /// # Examples
    /// ```ignore
    /// let rules = RouteRules::new("/", Some(false));
    /// assert_eq!(rules.route("installation"), "/installation");
    /// assert_eq!(rules.route("/docs/intro/"), "/docs/intro");
    /// ```
    pub fn route(&self, path: &str) -> String {
        let decoded = decode(path.trim());
        let joined = if decoded.starts_with(self.base_url) || decoded == self.base_trimmed() {
            decoded
        } else {
            format!("{}{}", self.base_url, decoded.trim_start_matches('/'))
        };
        self.apply_trailing_slash(clean_route(&joined))
    }

    /// Apply only the trailing slash rule to an already joined route, as
    /// done for inventory routes.
    pub fn apply_trailing_slash(&self, route: String) -> String {
        // The site root and baseUrl itself keep their slash
        if route == "/" || route == self.base_url || route == self.base_trimmed() {
            return self.base_url_for(route);
        }
        match self.trailing_slash {
            Some(true) if !route.ends_with('/') => format!("{route}/"),
            Some(false) if route.ends_with('/') => route.trim_end_matches('/').to_string(),
            _ => route,
        }
    }

    fn base_trimmed(&self) -> &str {
        match self.base_url.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        }
    }

    fn base_url_for(&self, route: String) -> String {
        if route == "/" {
            route
        } else {
            self.base_url.to_string()
        }
    }
}

/// Drop `.` segments and fold `..` into its parent. A trailing slash is
/// kept; `..` never climbs above `/`.
fn clean_route(route: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in route.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    let trailing = route.ends_with('/') || route.ends_with("/.") || route.ends_with("/..");
    let mut cleaned = format!("/{}", segments.join("/"));
    if trailing && !segments.is_empty() {
        cleaned.push('/');
    }
    cleaned
}

/// Decode percent-encoding, keeping the input when it is not valid UTF-8.
pub fn decode(path: &str) -> String {
    percent_decode_str(path)
        .decode_utf8()
        .map_or_else(|_| path.to_string(), |s| s.into_owned())
}
