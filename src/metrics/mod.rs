//! Metric calculation modules for classification evaluation.

pub mod f1_score;
pub mod precision_recall;

pub use f1_score::calculate_f1_score;
pub use precision_recall::{calculate_precision, calculate_recall};
