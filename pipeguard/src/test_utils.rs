//! Helpers for building in-memory frames in tests and examples.

use crate::core::Frame;
use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::compute::concat_batches;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Builds an eager single-column `Int64` frame.
pub fn int64_frame(column: &str, values: Vec<Option<i64>>) -> Frame {
    let schema = Arc::new(Schema::new(vec![Field::new(column, DataType::Int64, true)]));
    let array: ArrayRef = Arc::new(Int64Array::from(values));
    let batch = RecordBatch::try_new(schema, vec![array]).expect("valid test batch");
    Frame::from_batch(batch)
}

/// Builds an eager two-column `Int64` frame.
pub fn int64_pair_frame(
    left: &str,
    left_values: Vec<Option<i64>>,
    right: &str,
    right_values: Vec<Option<i64>>,
) -> Frame {
    let schema = Arc::new(Schema::new(vec![
        Field::new(left, DataType::Int64, true),
        Field::new(right, DataType::Int64, true),
    ]));
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(left_values)),
        Arc::new(Int64Array::from(right_values)),
    ];
    let batch = RecordBatch::try_new(schema, arrays).expect("valid test batch");
    Frame::from_batch(batch)
}

/// Builds an eager single-column `Utf8` frame.
pub fn string_frame(column: &str, values: Vec<Option<&str>>) -> Frame {
    let schema = Arc::new(Schema::new(vec![Field::new(column, DataType::Utf8, true)]));
    let array: ArrayRef = Arc::new(StringArray::from(values));
    let batch = RecordBatch::try_new(schema, vec![array]).expect("valid test batch");
    Frame::from_batch(batch)
}

/// Builds an eager zero-row `Int64` frame.
pub fn empty_int64_frame(column: &str) -> Frame {
    let schema = Arc::new(Schema::new(vec![Field::new(column, DataType::Int64, true)]));
    Frame::eager(schema, vec![])
}

/// Asserts that two frames hold the same rows under the same schema,
/// forcing materialization of both.
pub async fn assert_frames_equal(left: Frame, right: Frame) {
    let left_schema = left.schema();
    let right_schema = right.schema();
    assert_eq!(left_schema, right_schema, "frame schemas differ");

    let left_rows = concat_batches(&left_schema, &left.collect().await.expect("collect left"))
        .expect("concat left");
    let right_rows = concat_batches(&right_schema, &right.collect().await.expect("collect right"))
        .expect("concat right");
    assert_eq!(left_rows, right_rows, "frame contents differ");
}
