//! Integration tests for the `verify` entry point.

use datafusion::prelude::{col, lit};
use pipeguard::prelude::*;
use pipeguard::test_utils::{assert_frames_equal, empty_int64_frame, int64_frame};

#[tokio::test]
async fn test_expression_holding_everywhere_passes_frame_through() {
    let frame = int64_frame("x", vec![Some(1), Some(2), Some(3)]);
    let result = frame.clone().pipe(&verify(col("x").gt(lit(0)))).await.unwrap();

    assert!(result.is_eager());
    assert_frames_equal(frame, result).await;
}

#[tokio::test]
async fn test_lazy_frame_stays_lazy_on_pass() {
    let frame = int64_frame("x", vec![Some(1), Some(2), Some(3)])
        .to_lazy()
        .unwrap();
    let result = frame.pipe(&verify(col("x").gt(lit(0)))).await.unwrap();

    assert!(result.is_lazy());
    assert_eq!(result.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_failing_rows_are_counted_in_the_error() {
    let frame = int64_frame("x", vec![Some(-5), Some(1), Some(0), Some(9)]);
    let err = frame.pipe(&verify(col("x").gt(lit(0)))).await.unwrap_err();

    assert_eq!(err.check_name(), Some("verify"));
    assert_eq!(
        err.to_string(),
        "verify failed: 2 row(s) did not satisfy condition"
    );
}

#[tokio::test]
async fn test_lazy_failure_forces_the_plan_to_a_scalar() {
    let frame = int64_frame("x", vec![Some(-5), Some(1)]).to_lazy().unwrap();
    let err = frame.pipe(&verify(col("x").gt(lit(0)))).await.unwrap_err();

    assert_eq!(err.check_name(), Some("verify"));
    assert!(err.to_string().contains("1 row(s)"));
}

#[tokio::test]
async fn test_null_outcomes_pass() {
    // x > 0 is unknown for the null row; unknown does not fail.
    let frame = int64_frame("x", vec![Some(1), None, Some(3)]);
    let result = frame.clone().pipe(&verify(col("x").gt(lit(0)))).await.unwrap();

    assert_frames_equal(frame, result).await;
}

#[tokio::test]
async fn test_empty_frame_passes_any_expression() {
    let frame = empty_int64_frame("x");
    let result = frame.pipe(&verify(col("x").lt(lit(0)))).await.unwrap();
    assert_eq!(result.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_check_is_rejected_at_apply_time() {
    // Building the stage succeeds; the frame is never evaluated.
    let stage = verify(Check::invalid::<String>());
    let frame = int64_frame("x", vec![Some(1)]);

    let err = frame.pipe(&stage).await.unwrap_err();
    match err {
        CheckError::InvalidCheck { type_name } => assert!(type_name.contains("String")),
        other => panic!("expected InvalidCheck, got {other}"),
    }
}

#[tokio::test]
async fn test_chained_checks_raise_only_the_first_failure() {
    let frame = int64_frame("id", vec![Some(1), Some(1), Some(2)]);

    // First stage passes, second fails; only the second's error surfaces.
    let err = frame
        .pipe(&verify(col("id").gt(lit(0))))
        .await
        .unwrap()
        .pipe(&verify(is_uniq(["id"]).unwrap()))
        .await
        .unwrap_err();

    assert_eq!(err.check_name(), Some("is_uniq"));
}

#[tokio::test]
async fn test_chained_checks_pass_the_frame_through_unchanged() {
    let frame = int64_frame("id", vec![Some(1), Some(2), Some(3)]);

    let result = frame
        .clone()
        .pipe(&verify(col("id").gt(lit(0))))
        .await
        .unwrap()
        .pipe(&verify(is_uniq(["id"]).unwrap()))
        .await
        .unwrap()
        .pipe(&verify(not_null(["id"]).unwrap()))
        .await
        .unwrap();

    assert_frames_equal(frame, result).await;
}

#[tokio::test]
async fn test_expression_on_missing_column_is_an_engine_error() {
    let frame = int64_frame("x", vec![Some(1)]);
    let err = frame.pipe(&verify(col("nope").gt(lit(0)))).await.unwrap_err();

    assert!(!err.is_validation_failure());
    assert_eq!(err.check_name(), None);
}
