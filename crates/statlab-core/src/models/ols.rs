//! Simple ordinary least squares regression
//!
//! Closed-form fit of y on a single predictor, with goodness-of-fit
//! diagnostics and a sampled line for plotting.

use crate::errors::{StatsError, StatsResult};
use crate::types::{Point, RegressionResult};

/// Number of equal steps in the sampled regression line (101 points)
const LINE_STEPS: usize = 100;

/// Fit a simple OLS regression of y on x
///
/// Computes slope and intercept from the running sums, the coefficient
/// of determination and Pearson correlation, the standard error of the
/// slope, and a 101-point fitted line spanning [min(x), max(x)]
/// inclusive.
///
/// # Arguments
/// * `data` - Observations (at least 2 points)
///
/// # Returns
/// `RegressionResult`; fails with `DegenerateInput` when all x values
/// are equal (the slope denominator is zero)
pub fn fit_ols(data: &[Point]) -> StatsResult<RegressionResult> {
    let n = data.len();
    if n < 2 {
        return Err(StatsError::InsufficientData { need: 2, got: n });
    }
    if data.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(StatsError::InvalidInput(
            "observations must be finite".into(),
        ));
    }

    let min_x = data.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = data.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    if min_x == max_x {
        return Err(StatsError::DegenerateInput(
            "all x values are equal; slope is undefined".into(),
        ));
    }

    let nf = n as f64;
    let sum_x: f64 = data.iter().map(|p| p.x).sum();
    let sum_y: f64 = data.iter().map(|p| p.y).sum();
    let sum_xy: f64 = data.iter().map(|p| p.x * p.y).sum();
    let sum_x2: f64 = data.iter().map(|p| p.x * p.x).sum();
    let sum_y2: f64 = data.iter().map(|p| p.y * p.y).sum();

    // Backstop for cancellation when distinct x values are nearly equal
    let denom = nf * sum_x2 - sum_x * sum_x;
    if denom.abs() <= f64::EPSILON * nf * sum_x2.abs() {
        return Err(StatsError::DegenerateInput(
            "x values are too close together; the fit is ill-conditioned".into(),
        ));
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / nf;

    let y_mean = sum_y / nf;
    let ss_total: f64 = data.iter().map(|p| (p.y - y_mean) * (p.y - y_mean)).sum();
    let ss_residual: f64 = data
        .iter()
        .map(|p| {
            let r = p.y - (slope * p.x + intercept);
            r * r
        })
        .sum();

    // All-equal y: the flat fit is exact and correlation is undefined.
    let (r_squared, correlation) = if ss_total > 0.0 {
        let corr_denom = (denom * (nf * sum_y2 - sum_y * sum_y)).sqrt();
        (
            1.0 - ss_residual / ss_total,
            (nf * sum_xy - sum_x * sum_y) / corr_denom,
        )
    } else {
        (1.0, 0.0)
    };

    // A two-point fit is exact (df = 0); report zero error rather than 0/0.
    let mse = if n > 2 { ss_residual / (nf - 2.0) } else { 0.0 };
    let x_mean = sum_x / nf;
    let s_xx: f64 = data.iter().map(|p| (p.x - x_mean) * (p.x - x_mean)).sum();
    let slope_std_error = (mse / s_xx).sqrt();
    let residual_std_error = mse.sqrt();

    let regression_line: Vec<Point> = (0..=LINE_STEPS)
        .map(|i| {
            let x = min_x + (max_x - min_x) * i as f64 / LINE_STEPS as f64;
            Point::new(x, slope * x + intercept)
        })
        .collect();

    Ok(RegressionResult {
        slope,
        intercept,
        r_squared,
        correlation,
        slope_std_error,
        residual_std_error,
        n_observations: n,
        regression_line,
    })
}
