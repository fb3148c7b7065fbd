//! Interfaces to the dictionary builders the estimators are driven by.
//!
//! Building lagged regressors from raw signals and expanding them into
//! polynomial terms is left to the caller. The estimators only need the two
//! traits below; closures with the matching signature implement them too.

use crate::types::{Lags, NarmaxError};
use ndarray::{Array1, Array2};

/// An ordered set of candidate regressors with parallel names.
///
/// Column order is the selection priority used by the ERR engine.
#[derive(Clone, Debug)]
pub struct Dictionary {
    pub matrix: Array2<f64>,
    pub names: Vec<String>,
}

impl Dictionary {
    /// # Errors
    /// Returns `NarmaxError::LengthMismatch` if `names` and the columns differ in count.
    pub fn new(matrix: Array2<f64>, names: Vec<String>) -> Result<Self, NarmaxError> {
        if matrix.ncols() != names.len() {
            return Err(NarmaxError::LengthMismatch {
                expected: matrix.ncols(),
                found: names.len(),
            });
        }
        Ok(Self { matrix, names })
    }

    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.ncols() == 0
    }
}

/// Output window and lagged regressors produced for one lag pair.
#[derive(Clone, Debug)]
pub struct LaggedDictionary {
    /// Output samples for which every lagged term exists.
    pub output: Array1<f64>,
    pub dictionary: Dictionary,
}

impl LaggedDictionary {
    /// # Errors
    /// Returns `NarmaxError::LengthMismatch` if the output window and the regressor rows differ.
    pub fn new(output: Array1<f64>, dictionary: Dictionary) -> Result<Self, NarmaxError> {
        if output.len() != dictionary.nrows() {
            return Err(NarmaxError::LengthMismatch {
                expected: output.len(),
                found: dictionary.nrows(),
            });
        }
        Ok(Self { output, dictionary })
    }
}

/// Builds the lagged regressors of an (input, output) pair.
pub trait Lagger {
    fn lag(&self, input: &[f64], output: &[f64], lags: Lags)
        -> Result<LaggedDictionary, NarmaxError>;
}

/// Expands a dictionary into polynomial terms up to `order`.
pub trait Expander {
    fn expand(&self, dictionary: &Dictionary, order: usize) -> Result<Dictionary, NarmaxError>;
}

impl<F> Lagger for F
where
    F: Fn(&[f64], &[f64], Lags) -> Result<LaggedDictionary, NarmaxError>,
{
    fn lag(
        &self,
        input: &[f64],
        output: &[f64],
        lags: Lags,
    ) -> Result<LaggedDictionary, NarmaxError> {
        self(input, output, lags)
    }
}

impl<F> Expander for F
where
    F: Fn(&Dictionary, usize) -> Result<Dictionary, NarmaxError>,
{
    fn expand(&self, dictionary: &Dictionary, order: usize) -> Result<Dictionary, NarmaxError> {
        self(dictionary, order)
    }
}
