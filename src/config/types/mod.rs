//! Configuration utility types.
//!
//! | Module  | Purpose                                    |
//! |---------|--------------------------------------------|
//! | `error` | ConfigError, collected diagnostics, kinds  |
//! | `field` | Dotted field paths for diagnostics         |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind};
pub use field::FieldPath;
