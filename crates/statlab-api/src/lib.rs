//! statlab-api: request-facing facade over statlab-core
//!
//! The boundary the request handler calls into: closed-enum dispatch by
//! distribution and test kind, the chart range/resolution policy, and
//! fixed-decimal display rounding. No transport framing lives here;
//! callers hand in already-parsed values and render the returned
//! structures verbatim.

mod types;

pub use types::*;

pub use statlab_core::sampling::{PrngSource, UniformSource};
pub use statlab_core::{DistributionParams, Point, StatsError, StatsResult};

use statlab_core::distributions::{
    binomial_cdf, binomial_pmf, normal_cdf, normal_pdf, poisson_cdf, poisson_pmf,
};
use statlab_core::ingest::parse_observations;
use statlab_core::models::fit_ols;
use statlab_core::sampling::sample_distribution;
use statlab_core::tests::{chi_square_gof, one_sample_t_test, Conclusion, TTestOptions};

/// Number of equal steps across a normal curve (201 chart samples)
const NORMAL_CURVE_STEPS: usize = 200;

/// Round to a fixed number of decimal places for display
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn conclusion_phrase(conclusion: Conclusion) -> String {
    match conclusion {
        Conclusion::Reject => "Reject null hypothesis".into(),
        Conclusion::FailToReject => "Fail to reject null hypothesis".into(),
    }
}

/// Evaluate a distribution over its display range
///
/// Normal curves span mean +/- 2 std in 201 evenly spaced points.
/// Binomial curves evaluate every k in 0..=n. Poisson curves evaluate
/// k up to floor(min(50, max(20, 4 lambda))). x is rounded to 3
/// decimals and y to 6.
pub fn distribution_curve(
    params: &DistributionParams,
    mode: EvaluationMode,
) -> StatsResult<Vec<ChartPoint>> {
    params.validate()?;

    let points = match *params {
        DistributionParams::Normal { mean, std } => {
            let range = 4.0 * std;
            let start = mean - range / 2.0;
            let step = range / NORMAL_CURVE_STEPS as f64;
            (0..=NORMAL_CURVE_STEPS)
                .map(|i| {
                    let x = start + step * i as f64;
                    let y = match mode {
                        EvaluationMode::Density => normal_pdf(x, mean, std),
                        EvaluationMode::Cumulative => normal_cdf(x, mean, std),
                    };
                    ChartPoint {
                        x: round_to(x, 3),
                        y: round_to(y, 6),
                    }
                })
                .collect()
        }
        DistributionParams::Binomial { n, p } => (0..=n)
            .map(|k| {
                let y = match mode {
                    EvaluationMode::Density => binomial_pmf(k as i64, n, p),
                    EvaluationMode::Cumulative => binomial_cdf(k as i64, n, p),
                };
                ChartPoint {
                    x: k as f64,
                    y: round_to(y, 6),
                }
            })
            .collect(),
        DistributionParams::Poisson { lambda } => {
            let max_k = (4.0 * lambda).max(20.0).min(50.0).floor() as i64;
            (0..=max_k)
                .map(|k| {
                    let y = match mode {
                        EvaluationMode::Density => poisson_pmf(k, lambda),
                        EvaluationMode::Cumulative => poisson_cdf(k, lambda),
                    };
                    ChartPoint {
                        x: k as f64,
                        y: round_to(y, 6),
                    }
                })
                .collect()
        }
    };
    Ok(points)
}

/// Run a hypothesis test over raw numeric data
///
/// Requires at least 2 values. The chi-square path takes absolute
/// values first so every cell is a valid count. Display rounding:
/// statistic, mean, and standard error to 4 decimals; p-value to 6;
/// expected cells to 2.
pub fn run_hypothesis_test(data: &[f64], kind: TestKind) -> StatsResult<TestSummary> {
    if data.len() < 2 {
        return Err(StatsError::InsufficientData {
            need: 2,
            got: data.len(),
        });
    }

    match kind {
        TestKind::TTest => {
            let result = one_sample_t_test(data, &TTestOptions::default())?;
            Ok(TestSummary::TTest(TTestSummary {
                statistic: round_to(result.statistic, 4),
                p_value: round_to(result.p_value, 6),
                degrees_of_freedom: result.df,
                conclusion: conclusion_phrase(result.conclusion),
                mean: round_to(result.mean, 4),
                standard_error: round_to(result.standard_error, 4),
            }))
        }
        TestKind::ChiSquare => {
            let observed: Vec<f64> = data.iter().map(|x| x.abs()).collect();
            let result = chi_square_gof(&observed, None)?;
            Ok(TestSummary::ChiSquare(ChiSquareSummary {
                statistic: round_to(result.statistic, 4),
                p_value: round_to(result.p_value, 6),
                degrees_of_freedom: result.df,
                conclusion: conclusion_phrase(result.conclusion),
                expected: result.expected.iter().map(|e| round_to(*e, 2)).collect(),
            }))
        }
    }
}

/// Parse uploaded text and fit a regression
///
/// Ingests the delimited text, requires at least 2 surviving
/// observations, and returns them in input order together with the
/// display summary of the fit.
pub fn regression_from_text(csv: &str) -> StatsResult<RegressionAnalysis> {
    let data = parse_observations(csv);
    if data.len() < 2 {
        return Err(StatsError::InsufficientData {
            need: 2,
            got: data.len(),
        });
    }

    let fit = fit_ols(&data)?;

    Ok(RegressionAnalysis {
        equation: format!("y = {:.4}x + {:.4}", fit.slope, fit.intercept),
        data,
        slope: round_to(fit.slope, 4),
        intercept: round_to(fit.intercept, 4),
        r_squared: round_to(fit.r_squared, 4),
        correlation: round_to(fit.correlation, 4),
        standard_error: round_to(fit.slope_std_error, 4),
        residual_standard_error: round_to(fit.residual_std_error, 4),
        regression_line: fit
            .regression_line
            .iter()
            .map(|p| ChartPoint {
                x: round_to(p.x, 3),
                y: round_to(p.y, 3),
            })
            .collect(),
    })
}

/// Generate a synthetic sample for a distribution
///
/// Normal variates are rounded to 4 decimals for display; counts from
/// the discrete distributions pass through unchanged.
pub fn generate_sample(
    params: &DistributionParams,
    size: usize,
    source: &mut dyn UniformSource,
) -> StatsResult<Vec<f64>> {
    let samples = sample_distribution(params, size, source)?;
    Ok(match params {
        DistributionParams::Normal { .. } => {
            samples.into_iter().map(|v| round_to(v, 4)).collect()
        }
        _ => samples,
    })
}
