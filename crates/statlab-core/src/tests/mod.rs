//! Statistical hypothesis testing
//!
//! - One-sample t-test (parametric)
//! - Chi-square goodness-of-fit (categorical)
//!
//! Both tests report approximate p-values built on the normal CDF; see
//! the individual modules for the approximation policies.


pub use categorical::{chi_square_gof, ChiSquareResult};
pub use parametric::{one_sample_t_test, TTestOptions, TTestResult};

/// Significance level shared by both tests
pub const ALPHA: f64 = 0.05;

/// Decision at the shared significance level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    /// Evidence against the null hypothesis
    Reject,
    /// No evidence against the null hypothesis
    FailToReject,
}

/// Filter non-finite values from a slice
fn filter_finite(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| x.is_finite()).collect()
}
