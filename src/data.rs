use crate::types::NarmaxError;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Validate an (input, output) signal pair before any dictionary is built.
///
/// Returns the common signal length.
///
/// # Errors
/// Returns `NarmaxError::EmptyInput` if either signal is empty.
/// Returns `NarmaxError::LengthMismatch` if the lengths differ.
pub fn validate_signals(input: &[f64], output: &[f64]) -> Result<usize, NarmaxError> {
    if input.is_empty() || output.is_empty() {
        return Err(NarmaxError::EmptyInput);
    }

    if input.len() != output.len() {
        return Err(NarmaxError::LengthMismatch {
            expected: input.len(),
            found: output.len(),
        });
    }

    Ok(input.len())
}

/// Subtract the sample mean from a vector.
pub fn center(v: ArrayView1<f64>) -> Array1<f64> {
    let mean = v.mean().unwrap_or(0.0);
    v.mapv(|x| x - mean)
}

/// Subtract each column's sample mean from that column.
///
/// A matrix with zero rows or zero columns is returned unchanged.
pub fn center_columns(m: ArrayView2<f64>) -> Array2<f64> {
    let mut out = m.to_owned();
    if m.nrows() == 0 {
        return out;
    }
    for mut col in out.axis_iter_mut(Axis(1)) {
        let mean = col.mean().unwrap_or(0.0);
        col -= mean;
    }
    out
}
