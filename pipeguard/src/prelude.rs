//! Prelude for commonly used types and functions in pipeguard.

pub use crate::core::{verify, Check, Frame, Predicate, Verifier};
pub use crate::error::{CheckError, Result};
pub use crate::logging::LoggingConfig;
pub use crate::predicates::{is_uniq, not_null, IsUniq, NotNull};
