//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Docs-site configuration resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Page inventory JSON from the content pipeline.
    /// Without it, the inventory is built from the docs directory.
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub inventory: Option<PathBuf>,

    /// Register a highlighting theme from a JSON file (repeatable)
    #[arg(long = "theme", value_name = "NAME=PATH", global = true, value_parser = parse_theme)]
    pub themes: Vec<(String, PathBuf)>,

    /// Error report format
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,

    /// Partial config layer applied over the builtin defaults, before the
    /// site config (e.g. settings shared by several sites)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub defaults: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate, merge, bind themes and resolve navigation links
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved configuration as JSON
    #[command(visible_alias = "r")]
    Resolve {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// List available highlighting themes
    #[command(visible_alias = "t")]
    Themes,

    /// Check links between markdown docs
    #[command(visible_alias = "l")]
    Links {
        /// Files or directories to check. If omitted, checks the docs directory.
        #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
        paths: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored, one block per error
    Human,
    /// `{"stage": ..., "errors": [{kind, path, detail, hint}]}`
    Json,
}

fn parse_theme(arg: &str) -> Result<(String, PathBuf), String> {
    match arg.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, found `{arg}`")),
    }
}
