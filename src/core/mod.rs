//! Core types - pure abstractions shared across the codebase.

mod link;
mod route;

pub use link::LinkKind;
pub use route::{RouteRules, decode};
