//! Lazy pipeline example: validation checkpoints over a deferred
//! DataFusion plan.
//!
//! The checks force their own scalar decisions, but the frame handed back
//! on success is still the lazy plan, so downstream stages keep composing
//! without materializing.
//!
//! Run with:
//! ```bash
//! cargo run --example lazy_pipeline
//! ```

use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use datafusion::datasource::MemTable;
use datafusion::prelude::*;
use pipeguard::logging::{init_logging, LoggingConfig};
use pipeguard::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::development())?;

    // Register an in-memory readings table.
    let schema = Arc::new(Schema::new(vec![
        Field::new("city", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("temperature", DataType::Int64, true),
    ]));
    let batch = RecordBatch::try_new(
        Arc::clone(&schema),
        vec![
            Arc::new(StringArray::from(vec![
                "amsterdam",
                "amsterdam",
                "berlin",
                "berlin",
            ])),
            Arc::new(Int64Array::from(vec![2020, 2021, 2020, 2021])),
            Arc::new(Int64Array::from(vec![Some(11), Some(12), None, Some(10)])),
        ],
    )?;
    let table = MemTable::try_new(schema, vec![vec![batch]])?;

    let ctx = SessionContext::new();
    ctx.register_table("readings", Arc::new(table))?;

    // Build a deferred plan; nothing has executed yet.
    let plan = ctx.table("readings").await?.filter(col("year").gt_eq(lit(2020)))?;

    let frame = Frame::lazy(plan)
        .pipe(&verify(is_uniq(["city", "year"])?))
        .await?
        .pipe(&verify(col("temperature").lt(lit(40))))
        .await?;

    println!("Frame is still lazy after validation: {}", frame.is_lazy());

    // Materialize once, at the end of the pipeline.
    let batches = frame.collect().await?;
    let rows: usize = batches.iter().map(|batch| batch.num_rows()).sum();
    println!("Validated {rows} reading(s).");

    Ok(())
}
