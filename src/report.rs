//! Delimited-text rendering of evaluation results.
//!
//! All output is plain comma-separated text; writing it to a file or console
//! is the caller's responsibility.

use crate::matrix::ConfusionMatrix;

impl ConfusionMatrix {
    /// Render the aggregate metrics as one CSV line: `precision,recall,f1`.
    ///
    /// No header, no trailing newline. Undefined values render as `NaN`.
    ///
    /// # Example
    ///
    /// ```
    /// use clf_eval::ConfusionMatrix;
    ///
    /// let mut cm = ConfusionMatrix::new(["spam", "ham"]).unwrap();
    /// cm.record("spam", "spam").unwrap();
    /// cm.record("ham", "ham").unwrap();
    /// assert_eq!(cm.to_metrics_csv(), "1,1,1");
    /// ```
    #[must_use]
    pub fn to_metrics_csv(&self) -> String {
        format!("{},{},{}", self.precision(), self.recall(), self.f1())
    }

    /// Render the full count table as CSV.
    ///
    /// Header line: `A\P,` followed by the class names (row = actual,
    /// column = predicted). One line per class: the class name followed by
    /// that row's counts. Every line, header included, is newline-terminated.
    ///
    /// # Example
    ///
    /// ```
    /// use clf_eval::ConfusionMatrix;
    ///
    /// let mut cm = ConfusionMatrix::new(["spam", "ham"]).unwrap();
    /// cm.record("spam", "spam").unwrap();
    /// assert_eq!(cm.to_matrix_csv(), "A\\P,spam,ham\nspam,1,0\nham,0,0\n");
    /// ```
    #[must_use]
    pub fn to_matrix_csv(&self) -> String {
        let mut out = String::new();

        out.push_str("A\\P,");
        out.push_str(&self.classes().join(","));
        out.push('\n');

        for (label, name) in self.classes().iter().enumerate() {
            out.push_str(name);
            for count in &self.rows()[label] {
                out.push(',');
                out.push_str(&count.to_string());
            }
            out.push('\n');
        }

        out
    }
}

/// Render a batch report over a sequence of independent evaluation splits.
///
/// Header line `Split #,Precision,Recall,F1`, then one line per accumulator in
/// input order, prefixed with its zero-based split index. Every line is
/// newline-terminated.
///
/// # Example
///
/// ```
/// use clf_eval::{batch_metrics_csv, ConfusionMatrix};
///
/// let mut fold = ConfusionMatrix::new(["spam", "ham"]).unwrap();
/// fold.record("spam", "spam").unwrap();
/// fold.record("ham", "ham").unwrap();
///
/// let report = batch_metrics_csv(&[fold.clone(), fold]);
/// assert_eq!(report.lines().count(), 3);
/// assert!(report.starts_with("Split #,Precision,Recall,F1\n"));
/// ```
#[must_use]
pub fn batch_metrics_csv(splits: &[ConfusionMatrix]) -> String {
    let mut out = String::from("Split #,Precision,Recall,F1\n");
    for (split, cm) in splits.iter().enumerate() {
        out.push_str(&format!("{},{}\n", split, cm.to_metrics_csv()));
    }
    out
}
