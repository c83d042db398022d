//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod links;
mod report;
pub mod resolve;
pub mod themes;

pub use args::{Cli, Commands, ReportFormat};
