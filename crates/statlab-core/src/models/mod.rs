//! Regression model implementations

mod ols;

pub use ols::fit_ols;
