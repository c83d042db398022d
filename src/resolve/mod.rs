//! Reference resolution and the shared broken-link policy.
//!
//! | Module     | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `policy`   | `LinkFailurePolicy` (throw / warn / ignore)       |
//! | `resolver` | Navbar and footer targets → routes and URLs       |

mod policy;
mod resolver;

pub use policy::{BrokenLink, LinkFailurePolicy};
pub use resolver::{ResolvedConfig, ResolvedReference, Resolution, resolve};
