//! Error Reduction Ratio (ERR) of an ordered regressor dictionary.
//!
//! Each column is orthogonalized against every column before it (classical
//! Gram-Schmidt), and its ERR is the share of the output variance carried by
//! the new orthogonal direction. Summed over a full basis the ERR equals the
//! R² of the least-squares fit, so the running sum never exceeds 1 in exact
//! arithmetic. Once it reaches 1 the remaining columns are left at 0.

use crate::data::{center, center_columns};
use crate::types::NarmaxError;
use crate::vector::{dot, squared_norm};
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Incrementally built orthogonal basis.
///
/// Holds the unnormalized columns (Psi) and the same columns divided by their
/// squared norm (Psi_n). Capacity is fixed at construction; it lives for one
/// `compute_err` call only.
struct OrthogonalBasis {
    raw: Array2<f64>,
    normalized: Array2<f64>,
    len: usize,
}

impl OrthogonalBasis {
    fn with_capacity(rows: usize, cols: usize) -> Self {
        Self {
            raw: Array2::zeros((rows, cols)),
            normalized: Array2::zeros((rows, cols)),
            len: 0,
        }
    }

    /// Remove from `column` its projections onto every stored direction.
    ///
    /// With an empty basis the column is returned as is.
    fn orthogonalize(&self, column: ArrayView1<f64>) -> Array1<f64> {
        if self.len == 0 {
            return column.to_owned();
        }
        let raw = self.raw.slice(s![.., ..self.len]);
        let normalized = self.normalized.slice(s![.., ..self.len]);
        let projections = raw.t().dot(&column);
        &column - &normalized.dot(&projections)
    }

    fn push(&mut self, omega: &Array1<f64>, n_omega: f64) {
        self.raw.column_mut(self.len).assign(omega);
        self.normalized.column_mut(self.len).assign(&(omega / n_omega));
        self.len += 1;
    }
}

/// Compute the ERR of every column of `ds` against the output `y`.
///
/// `y` and the columns of `ds` are expected to be centered. Columns are
/// processed in the given order, which sets their selection priority. As soon
/// as the ERR accumulated so far reaches 1, processing stops and the remaining
/// entries stay 0.
///
/// No guard is applied to the squared norms: a column that is linearly
/// dependent on earlier ones (or a constant `y`) yields non-finite entries.
/// Use [`ensure_finite`] or [`explained_variance`] to detect them.
///
/// # Errors
/// Returns `NarmaxError::LengthMismatch` if `ds` does not have `y.len()` rows.
///
/// # Example
/// ```
/// use ndarray::array;
/// use narmax_select::compute_err;
///
/// let y = array![1.0, -1.0, 1.0, -1.0];
/// let ds = array![[1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0]];
/// let err = compute_err(y.view(), ds.view()).unwrap();
/// assert_eq!(err[0], 1.0);
/// assert_eq!(err[1], 0.0);
/// ```
pub fn compute_err(y: ArrayView1<f64>, ds: ArrayView2<f64>) -> Result<Array1<f64>, NarmaxError> {
    if ds.nrows() != y.len() {
        return Err(NarmaxError::LengthMismatch {
            expected: y.len(),
            found: ds.nrows(),
        });
    }

    let q = ds.ncols();
    let s2y = dot(y, y);
    let mut err = Array1::<f64>::zeros(q);
    let mut basis = OrthogonalBasis::with_capacity(y.len(), q);
    let mut explained = 0.0;

    for (col, column) in ds.axis_iter(Axis(1)).enumerate() {
        if explained >= 1.0 {
            break;
        }

        let omega = basis.orthogonalize(column);
        let n_omega = squared_norm(omega.view());
        let ratio = (dot(omega.view(), y) / n_omega).powi(2) * n_omega / s2y;

        err[col] = ratio;
        explained += ratio;
        basis.push(&omega, n_omega);
    }

    Ok(err)
}

/// Fail on the first non-finite ERR entry.
///
/// # Errors
/// Returns `NarmaxError::NumericalDegeneracy` naming the offending column.
pub fn ensure_finite(err: &Array1<f64>) -> Result<(), NarmaxError> {
    match err.iter().position(|v| !v.is_finite()) {
        Some(column) => Err(NarmaxError::NumericalDegeneracy { column }),
        None => Ok(()),
    }
}

/// Sum of an ERR vector clipped to 1.
///
/// # Errors
/// Returns `NarmaxError::NumericalDegeneracy` if any entry is non-finite.
pub fn explained_variance(err: &Array1<f64>) -> Result<f64, NarmaxError> {
    ensure_finite(err)?;
    Ok(err.sum().min(1.0))
}

/// Center `output` and every regressor column, then return the clipped ERR sum.
pub(crate) fn centered_explained_variance(
    output: ArrayView1<f64>,
    regressors: ArrayView2<f64>,
) -> Result<f64, NarmaxError> {
    let y = center(output);
    let ds = center_columns(regressors);
    explained_variance(&compute_err(y.view(), ds.view())?)
}
