//! Uniqueness predicate.

use crate::core::{scalar_i64, Check, Frame, Predicate};
use crate::error::{CheckError, Result};
use async_trait::async_trait;
use datafusion::functions_aggregate::expr_fn::{count, sum};
use datafusion::prelude::{col, lit, Expr};
use tracing::{debug, instrument};

const ROWS_PER_KEY: &str = "__rows_per_key";
const DUPLICATE_ROWS: &str = "__duplicate_rows";

/// Configured uniqueness predicate produced by [`is_uniq`].
///
/// Captures the column list at construction time; applying it counts the
/// rows participating in a duplicated value combination over exactly those
/// columns.
#[derive(Debug, Clone)]
pub struct IsUniq {
    columns: Vec<String>,
}

/// Builds a predicate asserting that the given column(s) have no duplicate
/// value combinations.
///
/// One column checks that column's values; multiple columns check the
/// composite tuple. Duplicate detection happens engine-side through a hash
/// aggregation, so cost stays linear in the row count.
///
/// # Errors
///
/// Returns [`CheckError::InvalidArgument`] if no columns are given. This is
/// raised at construction, before any frame is touched.
///
/// ```rust
/// use pipeguard::prelude::*;
///
/// # async fn example(frame: Frame) -> Result<()> {
/// let frame = frame
///     .pipe(&verify(is_uniq(["id"])?))
///     .await?
///     .pipe(&verify(is_uniq(["city_id", "year"])?))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub fn is_uniq<I, S>(columns: I) -> Result<IsUniq>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
    if columns.is_empty() {
        return Err(CheckError::InvalidArgument(
            "is_uniq() requires at least one column".to_string(),
        ));
    }
    Ok(IsUniq { columns })
}

impl IsUniq {
    /// Returns the columns being checked, in construction order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

#[async_trait]
impl Predicate for IsUniq {
    fn name(&self) -> &str {
        "is_uniq"
    }

    #[instrument(skip(self, frame), fields(columns = ?self.columns))]
    async fn apply(&self, frame: Frame) -> Result<Frame> {
        let group_exprs: Vec<Expr> = self.columns.iter().map(|c| col(c.as_str())).collect();

        // Group sizes per key combination; every row in a group of two or
        // more participates in a duplicate.
        let duplicates = frame
            .plan()?
            .aggregate(group_exprs, vec![count(lit(1)).alias(ROWS_PER_KEY)])?
            .filter(col(ROWS_PER_KEY).gt(lit(1)))?
            .aggregate(vec![], vec![sum(col(ROWS_PER_KEY)).alias(DUPLICATE_ROWS)])?;

        let n_dupes = scalar_i64(&duplicates.collect().await?)?;
        if n_dupes > 0 {
            debug!(n_dupes, "uniqueness check failed");
            return Err(CheckError::failed(
                self.name(),
                format!(
                    "is_uniq failed: {n_dupes} duplicate(s) in {:?}",
                    self.columns
                ),
            ));
        }
        Ok(frame)
    }
}

impl From<IsUniq> for Check {
    fn from(predicate: IsUniq) -> Self {
        Check::predicate(predicate)
    }
}
