//! Property-based tests using proptest
//!
//! These tests verify mathematical properties and invariants that should
//! always hold regardless of the input values.

use clf_eval::metrics::{calculate_f1_score, calculate_precision, calculate_recall};
use clf_eval::{batch_metrics_csv, matrix_from_csv, ConfusionMatrix};
use proptest::prelude::*;

// Property: precision is always defined and in [0, 1]
proptest! {
    #[test]
    fn prop_precision_range(tp in 0u32..1000, fp in 0u32..1000) {
        let precision = calculate_precision(f64::from(tp), f64::from(fp));
        prop_assert!(
            (0.0..=1.0).contains(&precision),
            "Precision should be in [0,1], got {}", precision
        );
    }

    #[test]
    fn prop_recall_range_when_defined(tp in 0u32..1000, fn_ in 1u32..1000) {
        let recall = calculate_recall(f64::from(tp), f64::from(fn_));
        prop_assert!(
            (0.0..=1.0).contains(&recall),
            "Recall should be in [0,1] when defined, got {}", recall
        );
    }

    #[test]
    fn prop_f1_at_most_arithmetic_mean(
        precision in 0.0f64..=1.0,
        recall in 0.0f64..=1.0
    ) {
        let f1 = calculate_f1_score(precision, recall);
        if !f1.is_nan() {
            prop_assert!(f1 >= 0.0 && f1 <= 1.0, "F1 should be in [0,1], got {}", f1);
            prop_assert!(
                f1 <= (precision + recall) / 2.0 + 1e-10,
                "Harmonic mean should not exceed arithmetic mean"
            );
        }
    }
}

// Property: recording is purely additive, one cell at a time
proptest! {
    #[test]
    fn prop_record_additive(
        actual in 0usize..3,
        predicted in 0usize..3,
        repeats in 1usize..40
    ) {
        let mut cm = ConfusionMatrix::new(["a", "b", "c"]).unwrap();
        for _ in 0..repeats {
            cm.record_by_index(actual, predicted).unwrap();
        }

        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (actual, predicted) {
                    repeats as f64
                } else {
                    0.0
                };
                prop_assert_eq!(cm.count(row, col).unwrap(), expected);
            }
        }
    }
}

// Property: aggregates stay in [0, 1] whenever every class has support
proptest! {
    #[test]
    fn prop_aggregates_bounded(
        counts in proptest::collection::vec(0u32..30, 9)
    ) {
        let mut cm = ConfusionMatrix::new(["a", "b", "c"]).unwrap();
        // One guaranteed hit per class keeps every row populated, so no
        // per-class term is NaN.
        for label in 0..3 {
            cm.record_by_index(label, label).unwrap();
        }
        for (cell, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                cm.record_by_index(cell / 3, cell % 3).unwrap();
            }
        }

        for value in [cm.precision(), cm.recall(), cm.f1(), cm.accuracy()] {
            prop_assert!(
                (0.0..=1.0).contains(&value),
                "aggregate should be in [0,1], got {}", value
            );
        }
    }
}

// Property: the matrix CSV dump parses back to the exact same counts
proptest! {
    #[test]
    fn prop_matrix_csv_roundtrip(
        counts in proptest::collection::vec(0u32..30, 9)
    ) {
        let mut cm = ConfusionMatrix::new(["a", "b", "c"]).unwrap();
        for (cell, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                cm.record_by_index(cell / 3, cell % 3).unwrap();
            }
        }

        let parsed = matrix_from_csv(&cm.to_matrix_csv()).unwrap();
        prop_assert_eq!(parsed.classes(), cm.classes());
        for row in 0..3 {
            for col in 0..3 {
                prop_assert_eq!(
                    parsed.count(row, col).unwrap(),
                    cm.count(row, col).unwrap()
                );
            }
        }
    }
}

// Property: batch report always has one header plus one line per split
proptest! {
    #[test]
    fn prop_batch_report_line_count(num_splits in 0usize..6) {
        let mut split = ConfusionMatrix::new(["a", "b"]).unwrap();
        split.record("a", "a").unwrap();
        split.record("b", "a").unwrap();

        let splits = vec![split; num_splits];
        let report = batch_metrics_csv(&splits);

        prop_assert_eq!(report.lines().count(), num_splits + 1);
        for (i, line) in report.lines().skip(1).enumerate() {
            prop_assert!(
                line.starts_with(&format!("{i},")),
                "data row {} should carry its split index: {}", i, line
            );
        }
    }
}
