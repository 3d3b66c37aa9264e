//! The verification entry point.
//!
//! [`verify`] turns a check into a [`Verifier`] stage. Nothing is evaluated
//! until the stage is applied to a frame; on success the frame flows
//! through untouched, on the first failure the stage raises and the chain
//! stops.

use crate::core::{Check, Frame};
use crate::error::{CheckError, Result};
use datafusion::prelude::Expr;
use tracing::{debug, instrument};

/// A single validation stage produced by [`verify`].
///
/// Applying the stage evaluates its check against a frame and returns the
/// frame unchanged on success. The materialization kind is preserved: a
/// lazy frame stays lazy even when the check forced a scalar decision.
#[derive(Debug)]
pub struct Verifier {
    check: Check,
}

/// Builds a validation stage from a check.
///
/// Accepts a boolean row expression or a configured predicate; anything
/// else is rejected when the stage is applied.
///
/// ```rust
/// use datafusion::prelude::*;
/// use pipeguard::prelude::*;
///
/// # async fn example(frame: Frame) -> Result<()> {
/// let frame = frame
///     .pipe(&verify(col("price").gt(lit(0))))
///     .await?
///     .pipe(&verify(is_uniq(["order_id"])?))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub fn verify(check: impl Into<Check>) -> Verifier {
    Verifier {
        check: check.into(),
    }
}

impl Verifier {
    /// Evaluates the check against `frame`.
    ///
    /// Returns the frame unchanged if the check holds. Raises
    /// [`CheckError::Failed`] when the data violates the check,
    /// [`CheckError::InvalidCheck`] when the stage was built from something
    /// that is neither an expression nor a predicate.
    #[instrument(skip(self, frame), fields(check = %self.check.kind()))]
    pub async fn apply(&self, frame: Frame) -> Result<Frame> {
        match &self.check {
            Check::Expression(expr) => self.apply_expression(expr, frame).await,
            Check::Predicate(predicate) => predicate.apply(frame).await,
            Check::Invalid { type_name } => Err(CheckError::InvalidCheck {
                type_name: type_name.clone(),
            }),
        }
    }

    async fn apply_expression(&self, expr: &Expr, frame: Frame) -> Result<Frame> {
        // Keep only rows where the expression is definitely false. A null
        // outcome negates to null and drops out of the filter, so unknown
        // rows pass.
        let failing = frame.plan()?.filter(!expr.clone())?;
        let fail_count = failing.count().await?;
        if fail_count > 0 {
            debug!(fail_count, "expression check failed");
            return Err(CheckError::failed(
                "verify",
                format!("verify failed: {fail_count} row(s) did not satisfy condition"),
            ));
        }
        Ok(frame)
    }
}

impl Frame {
    /// Applies a validation stage to this frame, mirroring pipe-style
    /// chains over the underlying engine.
    pub async fn pipe(self, stage: &Verifier) -> Result<Frame> {
        stage.apply(self).await
    }
}
