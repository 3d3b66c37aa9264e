//! Core check and verification types for the pipeguard library.
//!
//! This module provides the fundamental building blocks for inline
//! validation:
//!
//! - **[`Frame`]**: the table value flowing through a pipeline, eager or
//!   lazy
//! - **[`Check`]**: what [`verify`] accepts, a boolean row expression or a
//!   named predicate
//! - **[`Predicate`]**: the extension seam for custom checks
//! - **[`Verifier`]**: a configured validation stage with a single apply
//!   operation
//!
//! ## Architecture
//!
//! ```text
//! Frame ──pipe──▶ Verifier(Check) ──pass──▶ Frame (unchanged)
//!                      │
//!                      └──fail──▶ CheckError { message, check_name }
//! ```

mod check;
mod frame;
mod verify;

pub use check::{Check, Predicate};
pub use frame::Frame;
pub use verify::{verify, Verifier};

pub(crate) use frame::scalar_i64;
