//! Small dictionary builders shared by the demos.

use narmax_select::{Dictionary, Expander, LaggedDictionary, Lagger, Lags, NarmaxError};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lags `x[k-1..=k-n_b]` and `y[k-1..=k-n_a]`.
pub struct DelayLagger;

impl Lagger for DelayLagger {
    fn lag(
        &self,
        input: &[f64],
        output: &[f64],
        lags: Lags,
    ) -> Result<LaggedDictionary, NarmaxError> {
        let burn = lags.input.max(lags.output);
        if burn >= output.len() {
            return Err(NarmaxError::Dictionary(format!(
                "lag {burn} leaves no samples"
            )));
        }
        let rows = output.len() - burn;

        let mut columns: Vec<(String, &[f64], usize)> = Vec::new();
        for j in 1..=lags.input {
            columns.push((format!("x[k-{j}]"), input, j));
        }
        for j in 1..=lags.output {
            columns.push((format!("y[k-{j}]"), output, j));
        }

        let matrix = Array2::from_shape_fn((rows, columns.len()), |(r, c)| {
            let (_, signal, delay) = &columns[c];
            signal[burn + r - delay]
        });
        let names = columns.into_iter().map(|(name, _, _)| name).collect();
        LaggedDictionary::new(
            Array1::from(output[burn..].to_vec()),
            Dictionary::new(matrix, names)?,
        )
    }
}

/// All monomials of the base terms up to the requested degree, grouped by degree.
pub struct MonomialExpander;

impl Expander for MonomialExpander {
    fn expand(&self, dictionary: &Dictionary, order: usize) -> Result<Dictionary, NarmaxError> {
        let mut terms: Vec<Vec<usize>> = Vec::new();
        for degree in 1..=order {
            let mut current = Vec::with_capacity(degree);
            combinations(0, dictionary.ncols(), degree, &mut current, &mut terms);
        }

        let m = &dictionary.matrix;
        let matrix = Array2::from_shape_fn((dictionary.nrows(), terms.len()), |(r, c)| {
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

/// Non-decreasing index tuples of length `degree` over `start..n`.
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

/// Uniform excitation in [-1, 1) from a seeded generator.
pub fn excitation(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}
