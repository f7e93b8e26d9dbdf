//! Value types exchanged with the request-handling collaborator

use statlab_core::Point;

/// Whether to evaluate the density/mass or the cumulative function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    Density,
    Cumulative,
}

/// Which hypothesis test to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    TTest,
    ChiSquare,
}

/// A display-rounded chart sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// Rounded to 3 decimals
    pub x: f64,
    /// Rounded to 6 decimals (3 on regression lines)
    pub y: f64,
}

/// Display summary of a one-sample t-test
#[derive(Debug, Clone)]
pub struct TTestSummary {
    /// t statistic, 4 decimals
    pub statistic: f64,
    /// Approximate p-value, 6 decimals
    pub p_value: f64,
    /// Degrees of freedom (n - 1)
    pub degrees_of_freedom: usize,
    /// Decision phrased for display
    pub conclusion: String,
    /// Sample mean, 4 decimals
    pub mean: f64,
    /// Standard error of the mean, 4 decimals
    pub standard_error: f64,
}

/// Display summary of a chi-square goodness-of-fit test
#[derive(Debug, Clone)]
pub struct ChiSquareSummary {
    /// Chi-square statistic, 4 decimals
    pub statistic: f64,
    /// Approximate p-value, 6 decimals
    pub p_value: f64,
    /// Degrees of freedom (cells - 1)
    pub degrees_of_freedom: usize,
    /// Decision phrased for display
    pub conclusion: String,
    /// Expected counts used, 2 decimals each
    pub expected: Vec<f64>,
}

/// Result of a hypothesis-test request, one variant per test kind
#[derive(Debug, Clone)]
pub enum TestSummary {
    TTest(TTestSummary),
    ChiSquare(ChiSquareSummary),
}

/// Display summary of a regression request
#[derive(Debug, Clone)]
pub struct RegressionAnalysis {
    /// Observations parsed from the uploaded text, in input order
    pub data: Vec<Point>,
    /// Fitted slope, 4 decimals
    pub slope: f64,
    /// Fitted intercept, 4 decimals
    pub intercept: f64,
    /// Coefficient of determination, 4 decimals
    pub r_squared: f64,
    /// Pearson correlation, 4 decimals
    pub correlation: f64,
    /// Standard error of the slope, 4 decimals
    pub standard_error: f64,
    /// Residual standard error, 4 decimals
    pub residual_standard_error: f64,
    /// Human-readable fitted equation
    pub equation: String,
    /// Fitted line, 101 points, both coordinates to 3 decimals
    pub regression_line: Vec<ChartPoint>,
}
