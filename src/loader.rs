//! Parsing confusion matrices back from their CSV dump.

use crate::error::{ClfEvalError, Result};
use crate::matrix::ConfusionMatrix;

/// Parse the matrix CSV format produced by
/// [`ConfusionMatrix::to_matrix_csv`] back into an accumulator.
///
/// The header must start with the `A\P` tag and name at least one class; each
/// of the following lines must start with the matching class name and carry
/// one count per class. Counts recorded into the original accumulator are
/// reconstructed exactly.
///
/// # Arguments
///
/// * `text` - Matrix CSV text, one newline-terminated line per row
///
/// # Errors
///
/// Returns [`ClfEvalError::InvalidMatrixCsv`] on structural or numeric
/// problems, and [`ClfEvalError::InvalidClassSet`] if the header names
/// duplicate classes.
///
/// # Example
///
/// ```
/// use clf_eval::matrix_from_csv;
///
/// let cm = matrix_from_csv("A\\P,cat,dog\ncat,3,1\ndog,0,2\n").unwrap();
/// assert_eq!(cm.count(0, 0).unwrap(), 3.0);
/// assert_eq!(cm.count(0, 1).unwrap(), 1.0);
/// ```
pub fn matrix_from_csv(text: &str) -> Result<ConfusionMatrix> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| ClfEvalError::InvalidMatrixCsv("empty input".to_string()))?;
    let mut header_fields = header.split(',');
    if header_fields.next() != Some("A\\P") {
        return Err(ClfEvalError::InvalidMatrixCsv(format!(
            "header must start with the A\\P tag, got {header:?}"
        )));
    }

    let classes: Vec<String> = header_fields.map(str::to_string).collect();
    if classes.is_empty() {
        return Err(ClfEvalError::InvalidMatrixCsv(
            "header names no classes".to_string(),
        ));
    }

    let n = classes.len();
    let rows: Vec<&str> = lines.collect();
    if rows.len() != n {
        return Err(ClfEvalError::InvalidMatrixCsv(format!(
            "expected {n} rows, got {}",
            rows.len()
        )));
    }

    let mut table = Vec::with_capacity(n);
    for (label, row) in rows.iter().enumerate() {
        let mut fields = row.split(',');

        let row_label = fields.next().unwrap_or_default();
        if row_label != classes[label] {
            return Err(ClfEvalError::InvalidMatrixCsv(format!(
                "row {label} labelled {row_label:?}, expected {:?}",
                classes[label]
            )));
        }

        let counts = fields
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    ClfEvalError::InvalidMatrixCsv(format!(
                        "invalid count {field:?} in row {row_label:?}"
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        if counts.len() != n {
            return Err(ClfEvalError::InvalidMatrixCsv(format!(
                "row {row_label:?} has {} counts, expected {n}",
                counts.len()
            )));
        }

        table.push(counts);
    }

    ConfusionMatrix::from_table(classes, table)
}
