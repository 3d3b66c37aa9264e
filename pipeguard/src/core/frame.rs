//! The table value flowing through a validation pipeline.
//!
//! A [`Frame`] is either a fully materialized set of Arrow record batches
//! or a deferred DataFusion plan. Checks never mutate a frame; they inspect
//! it and hand it back unchanged, so the materialization kind a caller puts
//! in is the kind they get back out.

use crate::error::{CheckError, Result};
use arrow::array::{Array, Int64Array};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use datafusion::datasource::MemTable;
use datafusion::prelude::{DataFrame, SessionContext};
use std::fmt;
use std::sync::Arc;

/// A columnar dataset with named, typed columns, either materialized
/// (eager) or deferred (lazy).
///
/// Frames are cheap to clone and safe to validate concurrently. Concurrent
/// evaluation of the same lazy plan inherits whatever guarantees DataFusion
/// provides for plan execution; this library adds no synchronization of its
/// own.
#[derive(Clone)]
pub enum Frame {
    /// Materialized record batches sharing one schema.
    Eager {
        /// Schema shared by every batch.
        schema: SchemaRef,
        /// The data, possibly empty (a zero-row table).
        batches: Vec<RecordBatch>,
    },
    /// A deferred DataFusion plan. Nothing executes until a check needs a
    /// scalar decision or the caller collects the frame.
    Lazy(DataFrame),
}

impl Frame {
    /// Creates an eager frame from record batches sharing `schema`.
    ///
    /// An empty batch list is a valid zero-row table.
    pub fn eager(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Frame::Eager { schema, batches }
    }

    /// Creates an eager frame from a single record batch.
    pub fn from_batch(batch: RecordBatch) -> Self {
        Frame::Eager {
            schema: batch.schema(),
            batches: vec![batch],
        }
    }

    /// Creates a lazy frame from a DataFusion plan.
    pub fn lazy(dataframe: DataFrame) -> Self {
        Frame::Lazy(dataframe)
    }

    /// Returns true if this frame is a deferred plan.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Frame::Lazy(_))
    }

    /// Returns true if this frame is materialized.
    pub fn is_eager(&self) -> bool {
        matches!(self, Frame::Eager { .. })
    }

    /// Returns the Arrow schema of this frame.
    pub fn schema(&self) -> SchemaRef {
        match self {
            Frame::Eager { schema, .. } => Arc::clone(schema),
            Frame::Lazy(dataframe) => Arc::clone(dataframe.schema().inner()),
        }
    }

    /// Returns this frame as a lazy frame over the same data.
    ///
    /// Eager frames are wrapped in an in-memory scan; lazy frames are
    /// returned as-is.
    pub fn to_lazy(&self) -> Result<Frame> {
        Ok(Frame::Lazy(self.plan()?))
    }

    /// Builds a DataFusion plan reading this frame's data.
    ///
    /// Checks evaluate against this plan while the frame itself flows
    /// through untouched.
    pub(crate) fn plan(&self) -> Result<DataFrame> {
        match self {
            Frame::Lazy(dataframe) => Ok(dataframe.clone()),
            Frame::Eager { schema, batches } => {
                let table = MemTable::try_new(Arc::clone(schema), vec![batches.clone()])?;
                let ctx = SessionContext::new();
                ctx.read_table(Arc::new(table)).map_err(Into::into)
            }
        }
    }

    /// Forces materialization, returning the frame's record batches.
    pub async fn collect(self) -> Result<Vec<RecordBatch>> {
        match self {
            Frame::Eager { batches, .. } => Ok(batches),
            Frame::Lazy(dataframe) => dataframe.collect().await.map_err(Into::into),
        }
    }

    /// Returns the number of rows in this frame, forcing lazy evaluation
    /// if needed.
    pub async fn count(&self) -> Result<usize> {
        match self {
            Frame::Eager { batches, .. } => Ok(batches.iter().map(RecordBatch::num_rows).sum()),
            Frame::Lazy(dataframe) => dataframe.clone().count().await.map_err(Into::into),
        }
    }
}

impl From<DataFrame> for Frame {
    fn from(dataframe: DataFrame) -> Self {
        Frame::Lazy(dataframe)
    }
}

impl From<RecordBatch> for Frame {
    fn from(batch: RecordBatch) -> Self {
        Frame::from_batch(batch)
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Eager { batches, .. } => {
                write!(f, "Frame::Eager({} batch(es))", batches.len())
            }
            Frame::Lazy(_) => write!(f, "Frame::Lazy"),
        }
    }
}

/// Extracts a single `Int64` scalar from an aggregate result.
///
/// A missing row or a null value reads as zero, matching SQL aggregates
/// over empty input.
pub(crate) fn scalar_i64(batches: &[RecordBatch]) -> Result<i64> {
    let Some(batch) = batches.iter().find(|batch| batch.num_rows() > 0) else {
        return Ok(0);
    };
    let array = batch
        .column(0)
        .as_any()
        .downcast_ref::<Int64Array>()
        .ok_or_else(|| {
            CheckError::Internal(format!(
                "expected Int64 aggregate result, got {}",
                batch.schema().field(0).data_type()
            ))
        })?;
    if array.is_null(0) {
        Ok(0)
    } else {
        Ok(array.value(0))
    }
}
