//! Result types for classification evaluation.

use serde::{Deserialize, Serialize};

/// Per-class evaluation metrics derived from a confusion matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Zero-based class index (position in the configured label set).
    pub class: usize,

    /// Class name.
    pub name: String,

    /// Precision: TP / (TP + FP). Exactly 0.0 when the class was never predicted.
    pub precision: f64,

    /// Recall: TP / (TP + FN). NaN when the class has no actual instances.
    pub recall: f64,

    /// F1: 2 * (precision * recall) / (precision + recall). NaN when undefined.
    pub f1: f64,

    /// Number of actual instances of this class (row total).
    pub support: f64,
}

/// Instance-weighted aggregate metrics for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Instance-weighted precision over all classes.
    pub precision: f64,

    /// Instance-weighted recall over all classes, NaN terms dropped.
    pub recall: f64,

    /// Harmonic mean of the aggregate precision and recall.
    pub f1: f64,
}
