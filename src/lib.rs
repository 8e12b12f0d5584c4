//! # clf-eval
//!
//! A Rust library for multi-class classification evaluation metrics computed
//! from confusion matrices.
//!
//! This library provides:
//! - A **confusion matrix accumulator** recording actual/predicted class
//!   pairs, addressable by class name or zero-based class index
//! - **Per-class precision, recall, and F1** derived from the count table
//! - **Instance-weighted aggregate** precision, recall, and F1, where each
//!   class is weighted by its share of the recorded instances
//! - **CSV serialization** of both the raw count table and the summary
//!   metrics, including a batch report over cross-validation splits, and
//!   parsing of the table format back into an accumulator
//!
//! ## Quick Start
//!
//! ```rust
//! use clf_eval::ConfusionMatrix;
//!
//! # fn main() -> clf_eval::Result<()> {
//! let mut cm = ConfusionMatrix::new(["cat", "dog"])?;
//!
//! // Record (actual, predicted) pairs from an evaluation run.
//! cm.record("cat", "cat")?;
//! cm.record("cat", "dog")?;
//! cm.record("dog", "dog")?;
//!
//! println!("precision: {:.4}", cm.precision());
//! println!("recall:    {:.4}", cm.recall());
//! println!("f1:        {:.4}", cm.f1());
//! # Ok(())
//! # }
//! ```
//!
//! ## Undefined metrics
//!
//! Precision for a class that was never predicted is exactly `0.0`. Recall for
//! a class with no actual instances is **NaN**, and F1 inherits that NaN. The
//! asymmetry is deliberate and part of the contract: callers can distinguish
//! "no instances to recall" from "recalled none". The aggregate recall drops
//! NaN terms from its weighted sum (without re-normalizing the weights); the
//! aggregate precision applies no filtering.
//!
//! ## Output formats
//!
//! Three comma-delimited text shapes, written by the caller:
//!
//! ```text
//! // metrics row (no header)
//! 0.8888888888888888,0.8333333333333333,0.8602150537634409
//!
//! // matrix CSV (row = actual class, column = predicted class)
//! A\P,cat,dog
//! cat,3,1
//! dog,0,2
//!
//! // batch report, one row per evaluation split
//! Split #,Precision,Recall,F1
//! 0,1,1,1
//! 1,0.5,0.5,0.5
//! ```

pub mod error;
pub mod loader;
pub mod matrix;
pub mod metrics;
pub mod report;
pub mod types;

// Re-export commonly used types and functions
pub use error::{ClfEvalError, Result};
pub use loader::matrix_from_csv;
pub use matrix::ConfusionMatrix;
pub use report::batch_metrics_csv;
pub use types::{ClassMetrics, MetricsSummary};
