//! docsite - configuration resolver for documentation sites.

mod cli;
mod config;
mod core;
mod logger;
mod markdown;
mod page;
mod pipeline;
mod resolve;
mod theme;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check => cli::check::check_site(&cli),
        Commands::Resolve { pretty, output } => {
            cli::resolve::resolve_site(&cli, *pretty, output.as_deref())
        }
        Commands::Themes => cli::themes::list_themes(&cli),
        Commands::Links { paths } => cli::links::check_links(&cli, paths),
    }
}
