use crate::data::validate_signals;
use crate::dictionary::{Expander, Lagger};
use crate::err::centered_explained_variance;
use crate::types::{LagGridEstimate, LagRecommendations, LagSearchOptions, Lags, NarmaxError};
use ndarray::{Array2, ArrayView1, Axis};

/// Explained variance per (output lag, input lag) pair.
///
/// Rows are indexed by the output lag n_a and columns by the input lag n_b,
/// both starting at 0.
#[derive(Clone, Debug, PartialEq)]
pub struct LagGrid {
    values: Array2<f64>,
}

impl LagGrid {
    /// Wrap a filled `(n_a + 1) x (n_b + 1)` array.
    pub fn from_array(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Largest lags the grid covers.
    pub fn max_lags(&self) -> Lags {
        let (rows, cols) = self.values.dim();
        Lags::new(cols.saturating_sub(1), rows.saturating_sub(1))
    }

    pub fn value(&self, lags: Lags) -> Option<f64> {
        self.values.get([lags.output, lags.input]).copied()
    }

    /// Largest explained variance in the grid (0 for an empty grid).
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn into_array(self) -> Array2<f64> {
        self.values
    }

    /// True when no cell is smaller than its lower neighbour on either axis
    /// by more than `tolerance`.
    ///
    /// The dominance shortcut used while filling relies on this property, which
    /// holds when raising a lag only adds regressors over the same samples.
    pub fn is_monotone(&self, tolerance: f64) -> bool {
        let (rows, cols) = self.values.dim();
        for na in 0..rows {
            for nb in 0..cols {
                let v = self.values[[na, nb]];
                if na > 0 && v + tolerance < self.values[[na - 1, nb]] {
                    return false;
                }
                if nb > 0 && v + tolerance < self.values[[na, nb - 1]] {
                    return false;
                }
            }
        }
        true
    }
}

/// Both lower neighbours (clamped at 0) already explain the full variance.
///
/// On the first row or column the clamped neighbour is the cell itself, which
/// is still unknown, so those cells are always computed.
fn dominated(cells: &Array2<Option<f64>>, na: usize, nb: usize) -> bool {
    let below = cells[[na.saturating_sub(1), nb]];
    let left = cells[[na, nb.saturating_sub(1)]];
    below == Some(1.0) && left == Some(1.0)
}

/// Estimate the input and output lags a NARMAX model of fixed order needs.
///
/// Every pair `(n_b, n_a)` up to `opts.max_lags` is scored, output lag outer
/// and input lag inner: the lagged dictionary is built at exactly that pair,
/// expanded to `model_order`, centered and run through the ERR engine. A cell
/// whose two lower neighbours both explain the full variance is set to 1
/// without recomputation.
///
/// The three recommendations are extracted with [`recommend_lags`]. When no
/// cell exceeds the threshold a warning is logged, `threshold_met` is false and
/// every recommendation sits at the max-lag corner.
///
/// # Errors
/// Returns validation errors for mismatched or empty signals, `model_order == 0`
/// or an invalid threshold, errors raised by the collaborators, and
/// `NarmaxError::NumericalDegeneracy` for degenerate dictionaries.
pub fn estimate_max_lags<L, E>(
    input: &[f64],
    output: &[f64],
    model_order: usize,
    lagger: &L,
    expander: &E,
    opts: &LagSearchOptions,
) -> Result<LagGridEstimate, NarmaxError>
where
    L: Lagger + ?Sized,
    E: Expander + ?Sized,
{
    validate_signals(input, output)?;
    if model_order == 0 {
        return Err(NarmaxError::InvalidConfig(
            "model_order must be >= 1".to_string(),
        ));
    }
    opts.validate()?;

    let max = opts.max_lags;
    let (rows, cols) = (max.output + 1, max.input + 1);
    let total = rows * cols;
    log::info!(
        "computing lag grid up to ({}, {}) at model order {}",
        max.input,
        max.output,
        model_order
    );

    let mut cells: Array2<Option<f64>> = Array2::from_elem((rows, cols), None);
    let mut evaluated = 0;
    let mut visited = 0;

    for na in 0..rows {
        for nb in 0..cols {
            let value = if dominated(&cells, na, nb) {
                1.0
            } else {
                evaluated += 1;
                let lagged = lagger.lag(input, output, Lags::new(nb, na))?;
                let expanded = expander.expand(&lagged.dictionary, model_order)?;
                centered_explained_variance(lagged.output.view(), expanded.matrix.view())?
            };
            cells[[na, nb]] = Some(value);

            visited += 1;
            log::debug!(
                "lag grid cell {}/{} (n_b={}, n_a={}) = {:.6}",
                visited,
                total,
                nb,
                na,
                value
            );
        }
    }

    let grid = LagGrid::from_array(cells.mapv(|cell| cell.unwrap_or(f64::NAN)));
    let recommendations = recommend_lags(&grid, opts.variance_accept_threshold);

    let threshold_met = grid.max() > opts.variance_accept_threshold;
    if !threshold_met {
        log::warn!(
            "max lags ({}, {}) do not suffice for the desired variance {}",
            max.input,
            max.output,
            opts.variance_accept_threshold
        );
    }
    log::debug!(
        "lag grid: {} of {} cells evaluated, {} skipped by dominance",
        evaluated,
        total,
        total - evaluated
    );

    Ok(LagGridEstimate {
        grid,
        recommendations,
        threshold_met,
        evaluated_cells: evaluated,
    })
}

/// Extract the `min_xy`, `min_x` and `min_y` recommendations from a filled grid.
///
/// A cell qualifies when its value is strictly above `threshold`.
///
/// * `min_xy`: the qualifying cell with the smallest `n_a + n_b`; ties go to
///   the first one in row-major order (smallest n_a, then smallest n_b).
/// * `min_y`: scanning output lags upward, the first row whose first
///   qualifying input lag is non-zero.
/// * `min_x`: scanning input lags upward, the first column whose first
///   qualifying output lag is non-zero.
///
/// Recommendations that find no cell stay at the grid's max-lag corner.
pub fn recommend_lags(grid: &LagGrid, threshold: f64) -> LagRecommendations {
    let values = grid.as_array();
    let mut rec = LagRecommendations::corner(grid.max_lags());

    let mut best = usize::MAX;
    for ((na, nb), &v) in values.indexed_iter() {
        if v > threshold && na + nb < best {
            best = na + nb;
            rec.min_xy = Lags::new(nb, na);
        }
    }

    let by_row = values
        .axis_iter(Axis(0))
        .enumerate()
        .find_map(|(na, row)| first_nonzero_exceeding(row, threshold).map(|nb| (nb, na)));
    if let Some((nb, na)) = by_row {
        rec.min_y = Lags::new(nb, na);
    }

    let by_col = values
        .axis_iter(Axis(1))
        .enumerate()
        .find_map(|(nb, col)| first_nonzero_exceeding(col, threshold).map(|na| (nb, na)));
    if let Some((nb, na)) = by_col {
        rec.min_x = Lags::new(nb, na);
    }

    rec
}

/// Index of the first entry above `threshold`, unless that index is 0.
fn first_nonzero_exceeding(line: ArrayView1<f64>, threshold: f64) -> Option<usize> {
    line.iter()
        .position(|&v| v > threshold)
        .filter(|&idx| idx != 0)
}
