//! The check contract accepted by [`verify`](crate::core::verify).
//!
//! A check is either a boolean-per-row expression over the frame's columns
//! or a named predicate that inspects the whole frame. The set of accepted
//! shapes is closed: anything else is recorded as invalid and rejected when
//! the check is applied.

use crate::core::Frame;
use crate::error::Result;
use async_trait::async_trait;
use datafusion::prelude::Expr;
use std::fmt;
use std::sync::Arc;

/// A named validation rule over a whole frame.
///
/// Implementations inspect the frame and either hand it back untouched or
/// raise a [`CheckError`](crate::error::CheckError) describing the
/// violation. The built-in predicates live in
/// [`predicates`](crate::predicates); implementing this trait is the
/// extension seam for custom checks.
#[async_trait]
pub trait Predicate: Send + Sync {
    /// Identifier recorded as `check_name` on failures.
    fn name(&self) -> &str;

    /// Validates the frame, returning it unchanged on success.
    async fn apply(&self, frame: Frame) -> Result<Frame>;
}

/// What [`verify`](crate::core::verify) accepts.
///
/// Exactly three shapes, resolved once when the check is applied:
/// a row-wise boolean expression, a configured predicate, or a recorded
/// invalid value.
pub enum Check {
    /// Boolean-per-row DataFusion expression over the frame's columns.
    Expression(Expr),
    /// A configured predicate such as [`is_uniq`](crate::predicates::is_uniq).
    Predicate(Arc<dyn Predicate>),
    /// A value satisfying neither contract. Rejected when applied, never
    /// when constructed.
    Invalid {
        /// Type name of the rejected value, reported in the error.
        type_name: String,
    },
}

impl Check {
    /// Wraps a boolean row expression.
    pub fn expression(expr: Expr) -> Self {
        Check::Expression(expr)
    }

    /// Wraps a predicate.
    pub fn predicate<P: Predicate + 'static>(predicate: P) -> Self {
        Check::Predicate(Arc::new(predicate))
    }

    /// Records a value of type `T` that is neither an expression nor a
    /// predicate. The mismatch is reported when the check is applied.
    pub fn invalid<T: ?Sized>() -> Self {
        Check::Invalid {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Short label for tracing output.
    pub(crate) fn kind(&self) -> &str {
        match self {
            Check::Expression(_) => "expression",
            Check::Predicate(predicate) => predicate.name(),
            Check::Invalid { .. } => "invalid",
        }
    }
}

impl From<Expr> for Check {
    fn from(expr: Expr) -> Self {
        Check::Expression(expr)
    }
}

impl From<Arc<dyn Predicate>> for Check {
    fn from(predicate: Arc<dyn Predicate>) -> Self {
        Check::Predicate(predicate)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Expression(expr) => f.debug_tuple("Expression").field(expr).finish(),
            Check::Predicate(predicate) => write!(f, "Predicate({})", predicate.name()),
            Check::Invalid { type_name } => write!(f, "Invalid({type_name})"),
        }
    }
}
