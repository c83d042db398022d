//! Error report formatting.
//!
//! Human reports go to stderr, JSON reports to stdout:
//!
//! ```text
//! {"stage": "resolve", "errors": [{"kind", "path", "detail", "hint"}]}
//! ```

use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;

use super::ReportFormat;
use crate::config::{ConfigDiagnostics, ErrorKind};
use crate::pipeline::Rejected;
use crate::utils::plural::{plural_count, plural_s};

/// Markdown link errors, which belong to no pipeline stage.
#[derive(Serialize)]
struct LinkReport<'a> {
    errors: &'a ConfigDiagnostics,
}

/// Print a pipeline rejection.
pub fn print_rejection(rejected: &Rejected, format: ReportFormat) -> anyhow::Result<()> {
    let title = format!("{} stage", rejected.stage);
    print_report(&title, rejected, &rejected.diagnostics, format)
}

/// Print broken markdown links rejected by `onBrokenMarkdownLinks`.
pub fn print_link_report(diagnostics: &ConfigDiagnostics, format: ReportFormat) -> anyhow::Result<()> {
    let report = LinkReport {
        errors: diagnostics,
    };
    print_report("markdown links", &report, diagnostics, format)
}

fn print_report<T: Serialize>(
    title: &str,
    report: &T,
    diagnostics: &ConfigDiagnostics,
    format: ReportFormat,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Human => eprintln!("{}", render_human(title, diagnostics)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn render_human(title: &str, diagnostics: &ConfigDiagnostics) -> String {
    format!(
        "{} {}\n\n{}",
        title.red().bold(),
        format!("({})", summarize(diagnostics)).dimmed(),
        diagnostics
    )
}

/// Count per kind, e.g. `2 broken links, 1 missing file`.
fn summarize(diagnostics: &ConfigDiagnostics) -> String {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for error in diagnostics.errors() {
        *counts.entry(error.kind.label()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(label, count)| plural_count(count, label))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line failure message returned from `main`.
pub fn failure_message(rejected: &Rejected) -> String {
    let total = rejected.diagnostics.len();
    let broken = rejected.diagnostics.of_kind(ErrorKind::BrokenLink).count();
    if broken == total {
        format!("{rejected}: {broken} broken link{}", plural_s(broken))
    } else {
        format!("{rejected}: {}", plural_count(total, "error"))
    }
}
