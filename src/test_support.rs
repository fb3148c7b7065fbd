//! Minimal lag and monomial dictionary builders for tests.

use crate::dictionary::{Dictionary, Expander, LaggedDictionary, Lagger};
use crate::types::{Lags, NarmaxError};
use ndarray::{Array1, Array2};

/// Linear lagger producing `x[k-j]` and `y[k-j]` columns.
///
/// Input terms run over `j = 0..=n_b` when `include_current_input` is set and
/// over `j = 1..=n_b` otherwise. Output terms always run over `j = 1..=n_a`.
/// With `burn_in` set, every lag pair shares the same sample window.
#[derive(Clone, Debug, Default)]
pub(crate) struct LinearLagger {
    pub include_current_input: bool,
    pub burn_in: Option<usize>,
}

impl LinearLagger {
    pub fn causal() -> Self {
        Self::default()
    }

    pub fn with_current_input() -> Self {
        Self {
            include_current_input: true,
            burn_in: None,
        }
    }

    pub fn fixed_window(mut self, burn_in: usize) -> Self {
        self.burn_in = Some(burn_in);
        self
    }
}

impl Lagger for LinearLagger {
    fn lag(
        &self,
        input: &[f64],
        output: &[f64],
        lags: Lags,
    ) -> Result<LaggedDictionary, NarmaxError> {
        let needed = lags.input.max(lags.output);
        let burn = self.burn_in.unwrap_or(needed);
        if burn < needed {
            return Err(NarmaxError::Dictionary(format!(
                "burn-in {burn} shorter than lag {needed}"
            )));
        }
        if burn >= output.len() {
            return Err(NarmaxError::Dictionary(format!(
                "burn-in {burn} leaves no samples"
            )));
        }
        let rows = output.len() - burn;

        let first_input = if self.include_current_input { 0 } else { 1 };
        let mut columns: Vec<(String, &[f64], usize)> = Vec::new();
        for j in first_input..=lags.input {
            let name = if j == 0 {
                "x[k]".to_string()
            } else {
                format!("x[k-{j}]")
            };
            columns.push((name, input, j));
        }
        for j in 1..=lags.output {
            columns.push((format!("y[k-{j}]"), output, j));
        }

        let matrix = Array2::from_shape_fn((rows, columns.len()), |(r, c)| {
            let (_, signal, delay) = &columns[c];
            signal[burn + r - delay]
        });
        let names = columns.into_iter().map(|(name, _, _)| name).collect();
        let target = Array1::from(output[burn..].to_vec());

        LaggedDictionary::new(target, Dictionary::new(matrix, names)?)
    }
}

/// Monomial expander: every product of up to `order` base columns.
///
/// Terms are grouped by degree; order 1 returns the base dictionary.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MonomialExpander;

impl Expander for MonomialExpander {
    fn expand(&self, dictionary: &Dictionary, order: usize) -> Result<Dictionary, NarmaxError> {
        let base = dictionary.ncols();
        let mut terms: Vec<Vec<usize>> = Vec::new();
        for degree in 1..=order {
            let mut current = Vec::with_capacity(degree);
            combinations(0, base, degree, &mut current, &mut terms);
        }

        let rows = dictionary.nrows();
        let m = &dictionary.matrix;
        let matrix = Array2::from_shape_fn((rows, terms.len()), |(r, c)| {
            terms[c].iter().map(|&j| m[[r, j]]).product()
        });
        let names = terms
            .iter()
            .map(|t| {
                t.iter()
                    .map(|&j| dictionary.names[j].as_str())
                    .collect::<Vec<_>>()
                    .join("*")
            })
            .collect();

        Dictionary::new(matrix, names)
    }
}

fn combinations(
    start: usize,
    n: usize,
    degree: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == degree {
        out.push(current.clone());
        return;
    }
    for i in start..n {
        current.push(i);
        combinations(i, n, degree, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_causal_lagger_layout() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 20.0, 30.0, 40.0, 50.0];
        let lagged = LinearLagger::causal().lag(&x, &y, Lags::new(2, 1)).unwrap();

        assert_eq!(lagged.dictionary.names, vec!["x[k-1]", "x[k-2]", "y[k-1]"]);
        assert_eq!(lagged.output.to_vec(), vec![30.0, 40.0, 50.0]);
        assert_eq!(lagged.dictionary.matrix[[0, 0]], 2.0);
        assert_eq!(lagged.dictionary.matrix[[0, 1]], 1.0);
        assert_eq!(lagged.dictionary.matrix[[0, 2]], 20.0);
    }

    #[test]
    fn test_current_input_and_zero_lags() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let with_current = LinearLagger::with_current_input()
            .lag(&x, &y, Lags::new(0, 0))
            .unwrap();
        assert_eq!(with_current.dictionary.names, vec!["x[k]"]);

        let causal = LinearLagger::causal().lag(&x, &y, Lags::new(0, 0)).unwrap();
        assert!(causal.dictionary.is_empty());
        assert_eq!(causal.output.len(), 3);
    }

    #[test]
    fn test_fixed_window() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];
        let lagger = LinearLagger::causal().fixed_window(3);
        let lagged = lagger.lag(&x, &y, Lags::new(1, 0)).unwrap();
        assert_eq!(lagged.output.len(), 2);
        assert!(lagger.lag(&x, &y, Lags::new(4, 0)).is_err());
    }

    #[test]
    fn test_monomial_expansion() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let lagged = LinearLagger::causal().lag(&x, &y, Lags::new(1, 1)).unwrap();

        let first = MonomialExpander.expand(&lagged.dictionary, 1).unwrap();
        assert_eq!(first.names, lagged.dictionary.names);

        let second = MonomialExpander.expand(&lagged.dictionary, 2).unwrap();
        assert_eq!(
            second.names,
            vec![
                "x[k-1]",
                "y[k-1]",
                "x[k-1]*x[k-1]",
                "x[k-1]*y[k-1]",
                "y[k-1]*y[k-1]"
            ]
        );
        // Row 0 is k = 1: x[0] = 1, y[0] = 1; row 2 is k = 3: x[2] = 3, y[2] = 3.
        assert_eq!(second.matrix[[2, 3]], 9.0);
    }
}
