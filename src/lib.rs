//! # narmax_select
//!
//! Structure estimation for NARMAX system identification based on the Error
//! Reduction Ratio (ERR) of an orthogonalized regressor dictionary.
//!
//! The crate answers two questions before a full forward-regression fit:
//!
//! * **Expansion order**: which polynomial order a NARX model needs to explain
//!   a target share of the output variance ([`estimate_expansion_order`]).
//! * **Maximum lags**: how many input and output lags it needs at a fixed
//!   order, scanned over a 2D grid ([`estimate_max_lags`]).
//!
//! Building the lagged regressors and their polynomial expansion is delegated
//! to caller-supplied [`Lagger`] and [`Expander`] implementations; closures
//! with the matching signature work as well.
//!
//! ## Example
//!
//! ```
//! use ndarray::{Array1, Array2};
//! use narmax_select::{
//!     estimate_max_lags, Dictionary, LagSearchOptions, LaggedDictionary, Lags, NarmaxError,
//! };
//!
//! // Input terms x[k-1..=k-n_b] and output terms y[k-1..=k-n_a].
//! let lagger = |x: &[f64], y: &[f64], lags: Lags| -> Result<LaggedDictionary, NarmaxError> {
//!     let burn = lags.input.max(lags.output);
//!     let rows = y.len() - burn;
//!     let mut cols: Vec<(&[f64], usize, String)> = Vec::new();
//!     cols.extend((1..=lags.input).map(|j| (x, j, format!("x[k-{j}]"))));
//!     cols.extend((1..=lags.output).map(|j| (y, j, format!("y[k-{j}]"))));
//!     let m = Array2::from_shape_fn((rows, cols.len()), |(r, c)| cols[c].0[burn + r - cols[c].1]);
//!     let names = cols.into_iter().map(|c| c.2).collect();
//!     LaggedDictionary::new(Array1::from(y[burn..].to_vec()), Dictionary::new(m, names)?)
//! };
//! // Linear model: the expansion is the dictionary itself.
//! let expander =
//!     |d: &Dictionary, _order: usize| -> Result<Dictionary, NarmaxError> { Ok(d.clone()) };
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let opts = LagSearchOptions {
//!     max_lags: Lags::new(1, 0),
//!     variance_accept_threshold: 0.98,
//! };
//!
//! let est = estimate_max_lags(&x, &y, 1, &lagger, &expander, &opts).unwrap();
//! assert_eq!(est.recommendations.min_xy, Lags::new(1, 0));
//! println!("grid:\n{}", est.grid.as_array());
//! ```

// Module declarations
pub mod data;
mod defaults;
pub mod dictionary;
pub mod err;
pub mod lags;
pub mod order;
#[cfg(test)]
mod test_support;
mod types;
pub mod vector;

// Re-export public types
pub use dictionary::{Dictionary, Expander, LaggedDictionary, Lagger};
pub use lags::LagGrid;
pub use types::{
    LagGridEstimate, LagRecommendations, LagSearchOptions, Lags, NarmaxError, OrderEstimate,
    OrderSearchOptions,
};

// Re-export main public functions
pub use err::{compute_err, ensure_finite, explained_variance};
pub use lags::{estimate_max_lags, recommend_lags};
pub use order::estimate_expansion_order;
