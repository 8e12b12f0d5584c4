//! Precision and recall calculation.

/// Calculate precision from true positive and false positive counts.
///
/// Precision = TP / (TP + FP)
///
/// # Arguments
///
/// * `tp` - True positive count
/// * `fp` - False positive count
///
/// # Returns
///
/// Returns the precision (0.0 to 1.0). Returns exactly 0.0 when no predictions
/// were made for the class (`tp + fp == 0`).
///
/// # Example
///
/// ```
/// use clf_eval::metrics::calculate_precision;
///
/// let precision = calculate_precision(8.0, 2.0);
/// assert_eq!(precision, 0.8);
///
/// // No predictions for the class: guarded to 0, not NaN.
/// assert_eq!(calculate_precision(0.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn calculate_precision(tp: f64, fp: f64) -> f64 {
    let denominator = tp + fp;
    if denominator == 0.0 {
        return 0.0;
    }

    let precision = tp / denominator;

    debug_assert!(
        (0.0..=1.0).contains(&precision),
        "Precision must be between 0 and 1, got {precision}"
    );

    precision
}

/// Calculate recall from true positive and false negative counts.
///
/// Recall = TP / (TP + FN)
///
/// Unlike [`calculate_precision`], the zero denominator is NOT guarded: a class
/// with no actual instances (`tp + fn_ == 0`) yields NaN, and callers are
/// expected to let that value flow through arithmetic. Downstream consumers
/// distinguish "no instances to recall" (NaN) from "recalled none" (0.0).
///
/// # Arguments
///
/// * `tp` - True positive count
/// * `fn_` - False negative count
///
/// # Returns
///
/// Returns the recall (0.0 to 1.0), or NaN when the class has no actual
/// instances.
///
/// # Example
///
/// ```
/// use clf_eval::metrics::calculate_recall;
///
/// let recall = calculate_recall(8.0, 2.0);
/// assert_eq!(recall, 0.8);
///
/// assert!(calculate_recall(0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn calculate_recall(tp: f64, fn_: f64) -> f64 {
    let recall = tp / (tp + fn_);

    debug_assert!(
        recall.is_nan() || (0.0..=1.0).contains(&recall),
        "Recall must be NaN or between 0 and 1, got {recall}"
    );

    recall
}
