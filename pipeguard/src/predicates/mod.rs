//! Built-in predicates for the pipeguard library.
//!
//! Each predicate is a small immutable value object built by a constructor
//! function that validates its configuration up front. The configured value
//! converts into a [`Check`](crate::core::Check) and is applied through
//! [`verify`](crate::core::verify):
//!
//! - [`is_uniq`]: no duplicate value combinations over the given column(s)
//! - [`not_null`]: no nulls in the given column(s)
//!
//! Custom predicates implement the
//! [`Predicate`](crate::core::Predicate) trait and are wrapped with
//! [`Check::predicate`](crate::core::Check::predicate).

mod is_uniq;
mod not_null;

pub use is_uniq::{is_uniq, IsUniq};
pub use not_null::{not_null, NotNull};
