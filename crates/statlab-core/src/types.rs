use crate::errors::{StatsError, StatsResult};

/// A single (x, y) observation or chart sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A distribution family together with its parameters
///
/// Built per call from caller input and discarded afterwards.
/// `validate` must pass before any density, cumulative, or sampling
/// computation runs; the leaf math functions assume valid parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionParams {
    /// Normal with mean and standard deviation (std > 0)
    Normal { mean: f64, std: f64 },
    /// Binomial with trial count (n >= 1) and success probability in [0, 1]
    Binomial { n: u64, p: f64 },
    /// Poisson with rate (lambda > 0)
    Poisson { lambda: f64 },
}

impl DistributionParams {
    /// Check parameter domains before any computation
    pub fn validate(&self) -> StatsResult<()> {
        match *self {
            Self::Normal { std, .. } if !(std > 0.0) => Err(StatsError::DomainViolation(
                format!("standard deviation must be positive, got {std}"),
            )),
            Self::Binomial { n: 0, .. } => Err(StatsError::DomainViolation(
                "binomial requires at least 1 trial".into(),
            )),
            Self::Binomial { p, .. } if !(0.0..=1.0).contains(&p) => Err(
                StatsError::DomainViolation(format!("probability must be in [0, 1], got {p}")),
            ),
            Self::Poisson { lambda } if !(lambda > 0.0) => Err(StatsError::DomainViolation(
                format!("lambda must be positive, got {lambda}"),
            )),
            _ => Ok(()),
        }
    }
}

/// Result of a simple ordinary least-squares fit
#[derive(Debug, Clone)]
pub struct RegressionResult {
    /// Fitted slope
    pub slope: f64,
    /// Fitted intercept
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Pearson correlation between x and y
    pub correlation: f64,
    /// Standard error of the slope estimate
    pub slope_std_error: f64,
    /// Residual standard error
    pub residual_std_error: f64,
    /// Number of observations used
    pub n_observations: usize,
    /// Fitted line sampled at 101 evenly spaced x values over [min(x), max(x)]
    pub regression_line: Vec<Point>,
}
