//! Property-based tests for the pipeguard validation library.
//!
//! These tests compute the expected failure counts independently in plain
//! Rust, then check that the library reports the same counts across
//! randomized inputs.

use datafusion::prelude::{col, lit};
use pipeguard::prelude::*;
use pipeguard::test_utils::int64_frame;
use proptest::prelude::*;
use std::collections::HashMap;

/// Rows participating in a duplicated value, computed the slow way.
fn expected_duplicate_rows(values: &[i64]) -> usize {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }
    values
        .iter()
        .filter(|value| counts[value] > 1)
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_distinct_values_always_pass(values in prop::collection::hash_set(any::<i64>(), 0..50)) {
        let values: Vec<Option<i64>> = values.into_iter().map(Some).collect();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let frame = int64_frame("id", values);
            let result = frame.pipe(&verify(is_uniq(["id"]).unwrap())).await;
            prop_assert!(result.is_ok());
            Ok(())
        })?;
    }

    #[test]
    fn prop_duplicate_counts_match_a_reference_count(values in prop::collection::vec(0i64..10, 1..60)) {
        let expected = expected_duplicate_rows(&values);
        let column: Vec<Option<i64>> = values.iter().copied().map(Some).collect();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let frame = int64_frame("id", column);
            match frame.pipe(&verify(is_uniq(["id"]).unwrap())).await {
                Ok(_) => prop_assert_eq!(expected, 0),
                Err(err) => {
                    prop_assert_eq!(err.check_name(), Some("is_uniq"));
                    prop_assert!(err.to_string().contains(&format!("{expected} duplicate(s)")));
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn prop_expression_failures_match_a_reference_count(
        values in prop::collection::vec(prop::option::of(-100i64..100), 0..60),
        threshold in -100i64..100,
    ) {
        // Nulls have unknown outcomes and never fail the check.
        let expected = values
            .iter()
            .filter(|value| matches!(value, Some(v) if *v <= threshold))
            .count();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let frame = int64_frame("x", values.clone());
            match frame.pipe(&verify(col("x").gt(lit(threshold)))).await {
                Ok(_) => prop_assert_eq!(expected, 0),
                Err(err) => {
                    prop_assert_eq!(err.check_name(), Some("verify"));
                    prop_assert!(err.to_string().contains(&format!("{expected} row(s)")));
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn prop_null_counts_match_a_reference_count(
        values in prop::collection::vec(prop::option::of(any::<i64>()), 0..60),
    ) {
        let expected = values.iter().filter(|value| value.is_none()).count();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let frame = int64_frame("x", values.clone());
            match frame.pipe(&verify(not_null(["x"]).unwrap())).await {
                Ok(_) => prop_assert_eq!(expected, 0),
                Err(err) => {
                    prop_assert_eq!(err.check_name(), Some("not_null"));
                    prop_assert!(err.to_string().contains(&format!("{expected} null(s)")));
                }
            }
            Ok(())
        })?;
    }
}

#[test]
fn reference_duplicate_count_handles_repeats() {
    assert_eq!(expected_duplicate_rows(&[1, 1, 1, 2, 2, 3]), 5);
    assert_eq!(expected_duplicate_rows(&[1, 2, 3]), 0);
    assert_eq!(expected_duplicate_rows(&[]), 0);
}
