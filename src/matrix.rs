//! Confusion matrix accumulator for multi-class classification.

use std::collections::HashMap;

use crate::error::{ClfEvalError, Result};
use crate::metrics::{calculate_f1_score, calculate_precision, calculate_recall};
use crate::types::{ClassMetrics, MetricsSummary};

/// A confusion matrix accumulator for one evaluation run.
///
/// Cell `(actual, predicted)` counts how many instances with true class
/// `actual` were predicted as `predicted`. The class label set is fixed at
/// construction and defines both the display order and the zero-based index
/// of each class. Counts are stored as `f64` and only ever increase; the two
/// `record` methods are the sole mutators.
///
/// Not thread-safe: each accumulator is expected to be owned and mutated by
/// exactly one caller context.
///
/// # Example
///
/// ```
/// use clf_eval::ConfusionMatrix;
///
/// let mut cm = ConfusionMatrix::new(["cat", "dog"]).unwrap();
/// cm.record("cat", "cat").unwrap();
/// cm.record("cat", "dog").unwrap();
/// cm.record("dog", "dog").unwrap();
///
/// assert_eq!(cm.class_precision(0), 1.0); // every "cat" prediction was right
/// assert_eq!(cm.class_recall(0), 0.5); // one of two cats was found
/// ```
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    classes: Vec<String>,
    class_index: HashMap<String, usize>,
    table: Vec<Vec<f64>>,
}

impl ConfusionMatrix {
    /// Create an accumulator for the given ordered class label set.
    ///
    /// # Arguments
    ///
    /// * `class_names` - Ordered sequence of unique class names
    ///
    /// # Errors
    ///
    /// Returns [`ClfEvalError::InvalidClassSet`] if the set is empty or
    /// contains duplicate names.
    ///
    /// # Example
    ///
    /// ```
    /// use clf_eval::ConfusionMatrix;
    ///
    /// let cm = ConfusionMatrix::new(["spam", "ham"]).unwrap();
    /// assert_eq!(cm.num_classes(), 2);
    ///
    /// assert!(ConfusionMatrix::new(["spam", "spam"]).is_err());
    /// ```
    pub fn new<I, S>(class_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = class_names.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err(ClfEvalError::InvalidClassSet(
                "class set must contain at least one class".to_string(),
            ));
        }

        let mut class_index = HashMap::with_capacity(classes.len());
        for (index, name) in classes.iter().enumerate() {
            if class_index.insert(name.clone(), index).is_some() {
                return Err(ClfEvalError::InvalidClassSet(format!(
                    "duplicate class name: {name}"
                )));
            }
        }

        let n = classes.len();
        Ok(Self {
            classes,
            class_index,
            table: vec![vec![0.0; n]; n],
        })
    }

    /// Rebuild an accumulator from an already-materialized count table.
    ///
    /// The caller guarantees the table is square and matches the class count;
    /// class set validation is re-run via [`ConfusionMatrix::new`].
    pub(crate) fn from_table(classes: Vec<String>, table: Vec<Vec<f64>>) -> Result<Self> {
        debug_assert_eq!(table.len(), classes.len());
        debug_assert!(table.iter().all(|row| row.len() == classes.len()));

        let mut cm = Self::new(classes)?;
        cm.table = table;
        Ok(cm)
    }

    /// Number of configured classes.
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Class names, in configured (display/index) order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Read a single cell of the count table.
    ///
    /// # Errors
    ///
    /// Returns [`ClfEvalError::IndexOutOfRange`] if either index is outside
    /// `[0, num_classes)`.
    pub fn count(&self, actual: usize, predicted: usize) -> Result<f64> {
        self.check_index(actual)?;
        self.check_index(predicted)?;
        Ok(self.table[actual][predicted])
    }

    /// Total number of recorded instances.
    #[must_use]
    pub fn total_instances(&self) -> f64 {
        self.total()
    }

    /// Record one classified instance by class name.
    ///
    /// # Arguments
    ///
    /// * `actual` - True class of the instance
    /// * `predicted` - Class the classifier assigned
    ///
    /// # Errors
    ///
    /// Returns [`ClfEvalError::UnknownClass`] if either name is not in the
    /// configured label set.
    pub fn record(&mut self, actual: &str, predicted: &str) -> Result<()> {
        let actual = self.lookup(actual)?;
        let predicted = self.lookup(predicted)?;
        self.record_by_index(actual, predicted)
    }

    /// Record one classified instance by zero-based class index.
    ///
    /// # Errors
    ///
    /// Returns [`ClfEvalError::IndexOutOfRange`] if either index is outside
    /// `[0, num_classes)`.
    pub fn record_by_index(&mut self, actual: usize, predicted: usize) -> Result<()> {
        self.check_index(actual)?;
        self.check_index(predicted)?;
        self.table[actual][predicted] += 1.0;
        Ok(())
    }

    /// Precision for a single class: TP / (TP + FP).
    ///
    /// Exactly 0.0 when the class was never predicted.
    ///
    /// # Panics
    ///
    /// Panics if `label >= num_classes()`.
    #[must_use]
    pub fn class_precision(&self, label: usize) -> f64 {
        let tp = self.table[label][label];
        let predicted: f64 = (0..self.num_classes()).map(|i| self.table[i][label]).sum();
        calculate_precision(tp, predicted - tp)
    }

    /// Recall for a single class: TP / (TP + FN).
    ///
    /// NaN when the class has no actual instances; see
    /// [`calculate_recall`](crate::metrics::calculate_recall).
    ///
    /// # Panics
    ///
    /// Panics if `label >= num_classes()`.
    #[must_use]
    pub fn class_recall(&self, label: usize) -> f64 {
        let tp = self.table[label][label];
        let actual: f64 = self.table[label].iter().sum();
        calculate_recall(tp, actual - tp)
    }

    /// F1 for a single class: harmonic mean of its precision and recall.
    ///
    /// NaN when precision + recall is zero or recall is undefined.
    ///
    /// # Panics
    ///
    /// Panics if `label >= num_classes()`.
    #[must_use]
    pub fn class_f1(&self, label: usize) -> f64 {
        calculate_f1_score(self.class_precision(label), self.class_recall(label))
    }

    /// Instance-weighted precision over all classes.
    ///
    /// Each per-class precision is weighted by that class's share of the
    /// recorded instances. No NaN filtering is applied; per-class precision is
    /// never NaN, so the aggregate is defined whenever any instance has been
    /// recorded.
    #[must_use]
    pub fn precision(&self) -> f64 {
        (0..self.num_classes())
            .map(|label| self.class_precision(label) * self.class_ratio(label))
            .sum()
    }

    /// Instance-weighted recall over all classes.
    ///
    /// Each per-class recall is weighted by that class's share of the recorded
    /// instances. Undefined (NaN) terms are dropped from the sum; the weights
    /// of the remaining terms are not re-normalized. A class with no actual
    /// instances carries zero weight, so dropping its NaN term does not skew
    /// the weighting.
    #[must_use]
    pub fn recall(&self) -> f64 {
        (0..self.num_classes())
            .map(|label| self.class_recall(label) * self.class_ratio(label))
            .filter(|term| !term.is_nan())
            .sum()
    }

    /// Instance-weighted F1: harmonic mean of [`precision`](Self::precision)
    /// and [`recall`](Self::recall).
    #[must_use]
    pub fn f1(&self) -> f64 {
        calculate_f1_score(self.precision(), self.recall())
    }

    /// Overall accuracy: proportion of instances on the table diagonal.
    ///
    /// NaN when no instances have been recorded.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let correct: f64 = (0..self.num_classes()).map(|i| self.table[i][i]).sum();
        correct / self.total()
    }

    /// Per-class metrics for all classes, in label order.
    #[must_use]
    pub fn class_metrics(&self) -> Vec<ClassMetrics> {
        (0..self.num_classes())
            .map(|label| ClassMetrics {
                class: label,
                name: self.classes[label].clone(),
                precision: self.class_precision(label),
                recall: self.class_recall(label),
                f1: self.class_f1(label),
                support: self.table[label].iter().sum(),
            })
            .collect()
    }

    /// The three instance-weighted aggregates as one record.
    #[must_use]
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            precision: self.precision(),
            recall: self.recall(),
            f1: self.f1(),
        }
    }

    /// Proportion of recorded instances whose actual class is `label`.
    fn class_ratio(&self, label: usize) -> f64 {
        let class_total: f64 = self.table[label].iter().sum();
        class_total / self.total()
    }

    fn total(&self) -> f64 {
        self.table.iter().flatten().sum()
    }

    pub(crate) fn rows(&self) -> &[Vec<f64>] {
        &self.table
    }

    fn lookup(&self, name: &str) -> Result<usize> {
        self.class_index
            .get(name)
            .copied()
            .ok_or_else(|| ClfEvalError::UnknownClass(name.to_string()))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.num_classes() {
            return Err(ClfEvalError::IndexOutOfRange {
                index,
                num_classes: self.num_classes(),
            });
        }
        Ok(())
    }
}
