//! Distribution density/mass and cumulative functions
//!
//! - Normal (pdf; cdf via the error function)
//! - Binomial (pmf in log space; cdf by direct summation)
//! - Poisson (pmf in log space; cdf by multiplicative accumulation)

mod binomial;
mod normal;
mod poisson;

pub use binomial::{binomial_cdf, binomial_pmf};
pub use normal::{normal_cdf, normal_pdf};
pub use poisson::{poisson_cdf, poisson_pmf};
