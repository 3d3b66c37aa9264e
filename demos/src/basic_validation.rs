//! Basic validation example demonstrating pipeguard's core functionality.
//!
//! This example shows how to:
//! - Insert validation checkpoints into a tabular pipeline
//! - Combine expression checks with named predicates
//! - Catch a `CheckError` and dispatch on the failing check's name
//!
//! Run with:
//! ```bash
//! cargo run --example basic_validation
//! ```

use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use datafusion::prelude::*;
use pipeguard::prelude::*;
use std::sync::Arc;

fn orders(ids: Vec<i64>, customers: Vec<&str>, amounts: Vec<Option<i64>>) -> Frame {
    let schema = Arc::new(Schema::new(vec![
        Field::new("order_id", DataType::Int64, false),
        Field::new("customer", DataType::Utf8, false),
        Field::new("amount", DataType::Int64, true),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(ids)),
            Arc::new(StringArray::from(customers)),
            Arc::new(Int64Array::from(amounts)),
        ],
    )
    .expect("valid example batch");
    Frame::from_batch(batch)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running basic validation example...\n");

    // Clean data: every checkpoint passes and the frame flows through.
    let clean = orders(
        vec![1, 2, 3],
        vec!["alice", "bob", "carol"],
        vec![Some(150), Some(200), Some(75)],
    );

    let validated = clean
        .pipe(&verify(is_uniq(["order_id"])?))
        .await?
        .pipe(&verify(not_null(["amount"])?))
        .await?
        .pipe(&verify(col("amount").gt(lit(0))))
        .await?;

    println!(
        "Clean batch passed all checkpoints ({} rows).\n",
        validated.count().await?
    );

    // Dirty data: duplicate order ids halt the chain at the first check.
    let dirty = orders(
        vec![1, 1, 2],
        vec!["alice", "alice", "bob"],
        vec![Some(150), Some(150), None],
    );

    match dirty.pipe(&verify(is_uniq(["order_id"])?)).await {
        Ok(_) => println!("Unexpected: dirty batch passed."),
        Err(CheckError::Failed {
            message,
            check_name,
        }) => {
            println!("Check {:?} failed: {message}", check_name.as_deref());
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
