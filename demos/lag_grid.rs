//! Lag grid scan for a second-order NARX system with measurement noise.
//!
//! The filled grid is written to `lag_grid.csv` (or the path given as the
//! first argument), one row per lag pair.
//!
//! Run with: cargo run --example lag_grid [-- out.csv]

mod common;

use common::{excitation, DelayLagger, MonomialExpander};
use narmax_select::{estimate_max_lags, LagSearchOptions, Lags};
use serde::Serialize;
use std::fs::File;

/// One grid cell, serialized as a CSV row.
#[derive(Debug, Serialize)]
struct GridRow {
    input_lag: usize,
    output_lag: usize,
    explained_variance: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "lag_grid.csv".to_string());

    let x = excitation(500, 3);
    let noise = excitation(500, 4);
    let mut y = vec![0.0; x.len()];
    for k in 3..x.len() {
        y[k] = 0.5 * y[k - 1] - 0.2 * y[k - 2] + 0.7 * x[k - 1] + 0.3 * x[k - 3] * y[k - 1]
            + 0.01 * noise[k];
    }

    let opts = LagSearchOptions {
        max_lags: Lags::new(4, 3),
        variance_accept_threshold: 0.98,
    };
    let est = estimate_max_lags(&x, &y, 2, &DelayLagger, &MonomialExpander, &opts)?;

    println!("grid (rows: output lag, columns: input lag):");
    println!("{:.4}", est.grid.as_array());
    println!(
        "evaluated {} cells, threshold met: {}",
        est.evaluated_cells, est.threshold_met
    );
    let rec = est.recommendations;
    println!("min_xy: {:?}", rec.min_xy);
    println!("min_x:  {:?}", rec.min_x);
    println!("min_y:  {:?}", rec.min_y);

    let grid = est.grid.into_array();
    let file = File::create(&filename)?;
    let mut wtr = csv::Writer::from_writer(file);
    for ((output_lag, input_lag), &explained_variance) in grid.indexed_iter() {
        wtr.serialize(GridRow {
            input_lag,
            output_lag,
            explained_variance,
        })?;
    }
    wtr.flush()?;
    println!("grid written to {filename}");
    Ok(())
}
