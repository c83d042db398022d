//! Path and URL utilities.
//!
//! Pure functions for path manipulation.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`, `clean_path`)
//! - [`route`]: URL utilities (`is_external_link`, `split_path_suffix`)

pub mod fs;
pub mod route;

pub use fs::{clean_path, normalize_path, resolve_path};
