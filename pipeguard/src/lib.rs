//! # Pipeguard - Inline Data Validation for Rust
//!
//! Pipeguard provides fail-fast validation checkpoints for tabular data
//! pipelines built on DataFusion. A checkpoint either passes the table
//! through unchanged or raises a descriptive error, so invalid data never
//! travels further down the chain than the first check it violates.
//!
//! ## Overview
//!
//! A pipeline pipes a [`Frame`](core::Frame) (eager record batches or a
//! lazy DataFusion plan) through one or more [`verify`](core::verify)
//! stages. Each stage evaluates its check by delegating the scan and
//! aggregation work to DataFusion, then returns the untouched frame on
//! success. The first failing stage raises a
//! [`CheckError`](error::CheckError) carrying the failing check's name and
//! a count-based message.
//!
//! ## Quick Start
//!
//! ```rust
//! use arrow::array::Int64Array;
//! use arrow::datatypes::{DataType, Field, Schema};
//! use arrow::record_batch::RecordBatch;
//! use datafusion::prelude::*;
//! use pipeguard::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let schema = Arc::new(Schema::new(vec![
//!     Field::new("order_id", DataType::Int64, false),
//!     Field::new("amount", DataType::Int64, true),
//! ]));
//! let batch = RecordBatch::try_new(
//!     Arc::clone(&schema),
//!     vec![
//!         Arc::new(Int64Array::from(vec![1, 2, 3])),
//!         Arc::new(Int64Array::from(vec![Some(10), None, Some(30)])),
//!     ],
//! )?;
//!
//! // Each checkpoint passes the frame through unchanged or raises.
//! let validated = Frame::from_batch(batch)
//!     .pipe(&verify(is_uniq(["order_id"])?))
//!     .await?
//!     .pipe(&verify(col("amount").gt(lit(0))))
//!     .await?;
//!
//! assert!(validated.is_eager());
//! # Ok(())
//! # }
//! ```
//!
//! Note that the `amount` check above passes: the null row has an unknown
//! outcome, and unknown rows do not count as failures.
//!
//! ## Handling failures
//!
//! Callers distinguish failures by check name, not by error subtypes:
//!
//! ```rust,ignore
//! match frame.pipe(&verify(is_uniq(["order_id"])?)).await {
//!     Ok(frame) => { /* continue the pipeline */ }
//!     Err(CheckError::Failed { check_name, message })
//!         if check_name.as_deref() == Some("is_uniq") =>
//!     {
//!         // e.g. route duplicates to a quarantine table
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! ```
//!
//! ## Checks
//!
//! - **Expressions**: any boolean-per-row DataFusion `Expr`, e.g.
//!   `col("price").gt(lit(0))`. Rows evaluating to false fail the check;
//!   rows evaluating to null pass (engine ternary logic).
//! - **Predicates**: named, configured checks over the whole frame.
//!   [`is_uniq`](predicates::is_uniq) and
//!   [`not_null`](predicates::not_null) are built in, and the
//!   [`Predicate`](core::Predicate) trait is the seam for custom ones.
//!
//! ## Architecture
//!
//! - **`core`**: the `Frame`, `Check`, `Predicate`, and `Verifier` types
//! - **`predicates`**: built-in predicate constructors
//! - **`error`**: the `CheckError` type and `Result` alias
//! - **`logging`**: `tracing-subscriber` setup helpers

pub mod core;
pub mod error;
pub mod logging;
pub mod predicates;
pub mod prelude;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
