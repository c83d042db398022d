//! Shared test fixtures.

/// A complete docs-site config, as a TOML document.
pub const PARPY_TOML: &str = r#"
title = "ParPy"
tagline = "A Python library providing configurable parallelization of Python code."
url = "https://parpy-lib.github.io"
baseUrl = "/"
projectName = "ParPy"
organizationName = "parpy-lib"
trailingSlash = false
deploymentBranch = "gh-pages"
onBrokenLinks = "throw"
onBrokenMarkdownLinks = "throw"

presets = [
  ["classic", { docs = { sidebarPath = "./sidebars.js", breadcrumbs = false }, blog = false, theme = { customCss = "./src/css/custom.css" } }],
]

[themeConfig.docs.sidebar]
hideable = true

[themeConfig.navbar]
title = "ParPy"
items = [
  { to = "installation", position = "left", label = "Installation" },
  { type = "doc", docId = "root", position = "left", label = "Documentation" },
  { href = "https://github.com/parpy-lib/", label = "GitHub", position = "right" },
]

[themeConfig.footer]
style = "dark"
copyright = "Copyright © {year} Lars Hummelgren"

[[themeConfig.footer.links]]
title = "Documentation"
items = [
  { label = "Tutorials", to = "/docs/tutorials" },
  { label = "Reference", to = "/docs/reference" },
]

[[themeConfig.footer.links]]
title = "Links"
items = [{ label = "GitHub", href = "https://github.com/parpy-lib/" }]

[themeConfig.prism]
additionalLanguages = ["bash"]
theme = "github"
darkTheme = "dracula"
"#;
