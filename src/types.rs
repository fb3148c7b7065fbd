use crate::defaults::{
    DEFAULT_MAX_INPUT_LAG, DEFAULT_MAX_ORDER, DEFAULT_MAX_OUTPUT_LAG,
    DEFAULT_VARIANCE_ACCEPT_THRESHOLD,
};
use crate::lags::LagGrid;

/// A pair of lag counts: `input` is n_b (x terms), `output` is n_a (y terms).
///
/// # Example
/// ```
/// use narmax_select::Lags;
/// let lags = Lags::new(2, 1);
/// assert_eq!(lags.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lags {
    pub input: usize,
    pub output: usize,
}

impl Lags {
    pub fn new(input: usize, output: usize) -> Self {
        Self { input, output }
    }

    /// Sum of both lags, used to rank grid cells by model size.
    pub fn total(&self) -> usize {
        self.input + self.output
    }
}

impl Default for Lags {
    fn default() -> Self {
        Self {
            input: DEFAULT_MAX_INPUT_LAG,
            output: DEFAULT_MAX_OUTPUT_LAG,
        }
    }
}

impl From<(usize, usize)> for Lags {
    fn from((input, output): (usize, usize)) -> Self {
        Self { input, output }
    }
}

/// Options for the expansion-order search.
///
/// # Example
/// ```
/// use narmax_select::{Lags, OrderSearchOptions};
/// let opts = OrderSearchOptions {
///     max_lags: Lags::new(4, 4),
///     max_order: 3,
///     variance_accept_threshold: 0.95,
/// };
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct OrderSearchOptions {
    /// Lags used to build the base dictionary once, before expansion.
    pub max_lags: Lags,
    /// Highest polynomial order tried. Must be >= 1.
    pub max_order: usize,
    /// Explained-variance fraction in (0, 1] at which the search stops.
    pub variance_accept_threshold: f64,
}

impl Default for OrderSearchOptions {
    fn default() -> Self {
        Self {
            max_lags: Lags::default(),
            max_order: DEFAULT_MAX_ORDER,
            variance_accept_threshold: DEFAULT_VARIANCE_ACCEPT_THRESHOLD,
        }
    }
}

impl OrderSearchOptions {
    pub fn validate(&self) -> Result<(), NarmaxError> {
        if self.max_order == 0 {
            return Err(NarmaxError::InvalidConfig(
                "max_order must be >= 1".to_string(),
            ));
        }
        validate_threshold(self.variance_accept_threshold)
    }
}

/// Options for the maximum-lag grid search.
#[derive(Clone, Debug)]
pub struct LagSearchOptions {
    /// Upper corner of the grid (inclusive on both axes).
    pub max_lags: Lags,
    /// Explained-variance fraction a cell must exceed to be recommended.
    pub variance_accept_threshold: f64,
}

impl Default for LagSearchOptions {
    fn default() -> Self {
        Self {
            max_lags: Lags::default(),
            variance_accept_threshold: DEFAULT_VARIANCE_ACCEPT_THRESHOLD,
        }
    }
}

impl LagSearchOptions {
    pub fn validate(&self) -> Result<(), NarmaxError> {
        validate_threshold(self.variance_accept_threshold)
    }
}

fn validate_threshold(threshold: f64) -> Result<(), NarmaxError> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        return Err(NarmaxError::InvalidConfig(format!(
            "variance_accept_threshold must lie in (0, 1], got {threshold}"
        )));
    }
    Ok(())
}

/// Result of the expansion-order search.
#[derive(Clone, Debug)]
pub struct OrderEstimate {
    /// Smallest order reaching the threshold, or `max_order` when none did.
    pub order: usize,
    /// Clipped ERR sums per order; entry 0 is the constant (mean) model.
    pub explained_variance: Vec<f64>,
    pub threshold_met: bool,
}

impl OrderEstimate {
    /// Explained variance of the selected order.
    pub fn selected_variance(&self) -> f64 {
        self.explained_variance.last().copied().unwrap_or(0.0)
    }
}

/// The three lag pairs extracted from a filled grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LagRecommendations {
    /// Smallest `input + output` above the threshold.
    pub min_xy: Lags,
    /// Smallest input lag (with its first sufficient output lag).
    pub min_x: Lags,
    /// Smallest output lag (with its first sufficient input lag).
    pub min_y: Lags,
}

impl LagRecommendations {
    /// All three recommendations pinned at the grid corner.
    pub fn corner(max_lags: Lags) -> Self {
        Self {
            min_xy: max_lags,
            min_x: max_lags,
            min_y: max_lags,
        }
    }
}

/// Output of the maximum-lag grid search.
#[derive(Clone, Debug)]
pub struct LagGridEstimate {
    pub grid: LagGrid,
    pub recommendations: LagRecommendations,
    pub threshold_met: bool,
    /// Cells that ran the ERR engine rather than the dominance shortcut.
    pub evaluated_cells: usize,
}

/// Library error type.
#[derive(thiserror::Error, Debug)]
pub enum NarmaxError {
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("empty input")]
    EmptyInput,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("dictionary construction failed: {0}")]
    Dictionary(String),
    #[error("non-finite error reduction ratio at column {column} (linearly dependent regressor or constant output)")]
    NumericalDegeneracy { column: usize },
}
