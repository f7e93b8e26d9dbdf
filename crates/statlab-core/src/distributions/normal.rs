//! Normal distribution density and cumulative functions

use statrs::function::erf::erf;
use std::f64::consts::{PI, SQRT_2};

/// Normal probability density function
///
/// Callers must ensure `std > 0` (see `DistributionParams::validate`).
pub fn normal_pdf(x: f64, mean: f64, std: f64) -> f64 {
    let z = (x - mean) / std;
    (1.0 / (std * (2.0 * PI).sqrt())) * (-0.5 * z * z).exp()
}

/// Normal cumulative distribution function
///
/// 0.5 * (1 + erf((x - mean) / (std * sqrt(2)))). The error function
/// comes from statrs; its accuracy carries through to the normal
/// approximations used by the hypothesis tests.
pub fn normal_cdf(x: f64, mean: f64, std: f64) -> f64 {
    0.5 * (1.0 + erf((x - mean) / (std * SQRT_2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_integrates_to_one() {
        // Trapezoidal integration over mean +/- 8 std
        let (mean, std) = (1.5, 2.0);
        let steps = 16_000;
        let lo = mean - 8.0 * std;
        let hi = mean + 8.0 * std;
        let h = (hi - lo) / steps as f64;
        let mut area = 0.0;
        for i in 0..steps {
            let a = normal_pdf(lo + h * i as f64, mean, std);
            let b = normal_pdf(lo + h * (i + 1) as f64, mean, std);
            area += 0.5 * (a + b) * h;
        }
        assert!((area - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_cdf_at_mean_is_half() {
        assert!((normal_cdf(0.0, 0.0, 1.0) - 0.5).abs() < 1e-12);
        assert!((normal_cdf(7.0, 7.0, 3.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cdf_symmetry() {
        let (mean, std) = (2.0, 1.5);
        for d in [0.5, 1.0, 2.5] {
            let left = normal_cdf(mean - d, mean, std);
            let right = normal_cdf(mean + d, mean, std);
            assert!((left + right - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cdf_known_value() {
        // Phi(1.96) ~ 0.975
        assert!((normal_cdf(1.96, 0.0, 1.0) - 0.975).abs() < 1e-3);
    }

    #[test]
    fn test_pdf_peaks_at_mean() {
        let peak = normal_pdf(0.0, 0.0, 1.0);
        assert!(peak > normal_pdf(0.5, 0.0, 1.0));
        assert!(peak > normal_pdf(-0.5, 0.0, 1.0));
        // 1 / sqrt(2 pi)
        assert!((peak - 0.3989422804014327).abs() < 1e-12);
    }
}
