//! Null-presence predicate.

use crate::core::{Check, Frame, Predicate};
use crate::error::{CheckError, Result};
use async_trait::async_trait;
use datafusion::prelude::{col, Expr};
use tracing::{debug, instrument};

/// Configured null-presence predicate produced by [`not_null`].
#[derive(Debug, Clone)]
pub struct NotNull {
    columns: Vec<String>,
}

/// Builds a predicate asserting that none of the given column(s) contain
/// null values.
///
/// A row fails when any of the named columns is null in that row.
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
/// let frame = frame.pipe(&verify(not_null(["name", "email"])?)).await?;
/// # Ok(())
/// # }
/// ```
pub fn not_null<I, S>(columns: I) -> Result<NotNull>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
    if columns.is_empty() {
        return Err(CheckError::InvalidArgument(
            "not_null() requires at least one column".to_string(),
        ));
    }
    Ok(NotNull { columns })
}

impl NotNull {
    /// Returns the columns being checked, in construction order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

#[async_trait]
impl Predicate for NotNull {
    fn name(&self) -> &str {
        "not_null"
    }

    #[instrument(skip(self, frame), fields(columns = ?self.columns))]
    async fn apply(&self, frame: Frame) -> Result<Frame> {
        let any_null = self
            .columns
            .iter()
            .map(|c| col(c.as_str()).is_null())
            .reduce(Expr::or)
            .ok_or_else(|| CheckError::Internal("not_null built with no columns".to_string()))?;

        let n_nulls = frame.plan()?.filter(any_null)?.count().await?;
        if n_nulls > 0 {
            debug!(n_nulls, "null check failed");
            return Err(CheckError::failed(
                self.name(),
                format!("not_null failed: {n_nulls} null(s) in {:?}", self.columns),
            ));
        }
        Ok(frame)
    }
}

impl From<NotNull> for Check {
    fn from(predicate: NotNull) -> Self {
        Check::predicate(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_at_least_one_column() {
        let err = not_null(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CheckError::InvalidArgument(_)));
        assert!(err.to_string().contains("requires at least one column"));
    }

    #[test]
    fn test_columns_preserve_construction_order() {
        let predicate = not_null(["name", "email"]).unwrap();
        assert_eq!(predicate.columns(), &["name", "email"]);
        assert_eq!(predicate.name(), "not_null");
    }
}
