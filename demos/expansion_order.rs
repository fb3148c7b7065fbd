//! Expansion order search on a noiseless quadratic NARX system.
//!
//! Run with: cargo run --example expansion_order

mod common;

use common::{excitation, DelayLagger, MonomialExpander};
use narmax_select::{estimate_expansion_order, Lags, OrderSearchOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x = excitation(400, 7);
    let mut y = vec![0.0; x.len()];
    for k in 2..x.len() {
        y[k] = 0.6 * y[k - 1] + 0.5 * x[k - 1] - 0.4 * x[k - 2] * x[k - 2];
    }

    let opts = OrderSearchOptions {
        max_lags: Lags::new(2, 1),
        max_order: 4,
        variance_accept_threshold: 0.98,
    };
    let est = estimate_expansion_order(&x, &y, &DelayLagger, &MonomialExpander, &opts)?;

    for (order, variance) in est.explained_variance.iter().enumerate() {
        println!("order {order}: explained variance {variance:.6}");
    }
    println!(
        "selected order {} (threshold met: {})",
        est.order, est.threshold_met
    );
    Ok(())
}
