use crate::data::{center, center_columns, validate_signals};
use crate::dictionary::{Expander, Lagger};
use crate::err::{compute_err, explained_variance};
use crate::types::{NarmaxError, OrderEstimate, OrderSearchOptions};

/// Estimate the polynomial expansion order a NARX model needs.
///
/// The lagged dictionary is built once at `opts.max_lags`. Orders `1..=max_order`
/// are then tried in turn: each expansion is centered, scored with the ERR
/// engine against the centered output window, and the clipped ERR sum is
/// recorded. The search stops at the first order whose explained variance
/// reaches `opts.variance_accept_threshold`.
///
/// Not reaching the threshold is not an error: a warning is logged, the
/// returned order is `max_order` and `threshold_met` is false.
///
/// # Arguments
/// * `input` - System input signal x
/// * `output` - System output signal y (same length as `input`)
/// * `lagger` - Builds the lagged dictionary
/// * `expander` - Builds the polynomial expansion of that dictionary
/// * `opts` - Search bounds and acceptance threshold
///
/// # Errors
/// Returns validation errors for mismatched or empty signals and invalid options,
/// errors raised by the collaborators, and `NarmaxError::NumericalDegeneracy`
/// when an expansion contains linearly dependent columns.
pub fn estimate_expansion_order<L, E>(
    input: &[f64],
    output: &[f64],
    lagger: &L,
    expander: &E,
    opts: &OrderSearchOptions,
) -> Result<OrderEstimate, NarmaxError>
where
    L: Lagger + ?Sized,
    E: Expander + ?Sized,
{
    validate_signals(input, output)?;
    opts.validate()?;

    let lagged = lagger.lag(input, output, opts.max_lags)?;
    let y_cut = center(lagged.output.view());

    // Order 0 is the constant model; the optimal constant of a centered output explains nothing.
    let mut variances = vec![0.0];
    let mut order = 0;

    for candidate in 1..=opts.max_order {
        order = candidate;
        log::debug!(
            "analysing expansion order {}/{}",
            candidate,
            opts.max_order
        );

        let expanded = expander.expand(&lagged.dictionary, candidate)?;
        let regressors = center_columns(expanded.matrix.view());
        let err = compute_err(y_cut.view(), regressors.view())?;
        let variance = explained_variance(&err)?;
        variances.push(variance);

        if variance >= opts.variance_accept_threshold {
            break;
        }
    }

    let selected = variances.last().copied().unwrap_or(0.0);
    let threshold_met = selected >= opts.variance_accept_threshold;
    if threshold_met {
        log::info!(
            "order {} model explaining {:.4}% of the variance selected",
            order,
            100.0 * selected
        );
    } else {
        log::warn!(
            "variance accept threshold {} not met (best {:.4}); increase max_order and/or max_lags",
            opts.variance_accept_threshold,
            selected
        );
    }

    Ok(OrderEstimate {
        order,
        explained_variance: variances,
        threshold_met,
    })
}
