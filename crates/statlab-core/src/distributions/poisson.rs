//! Poisson distribution mass and cumulative functions

use statrs::function::gamma::ln_gamma;

/// Poisson probability mass function
///
/// Returns 0 for k < 0 (zero-mass convention). Computed in log space
/// via ln_gamma so k beyond ~170 does not overflow a raw factorial.
pub fn poisson_pmf(k: i64, lambda: f64) -> f64 {
    if k < 0 {
        return 0.0;
    }
    let kf = k as f64;
    (kf * lambda.ln() - lambda - ln_gamma(kf + 1.0)).exp()
}

/// Poisson cumulative distribution function
///
/// Sums the mass function over 0..=k with the recurrence
/// term_i = term_{i-1} * lambda / i, avoiding per-term powers and
/// factorials.
pub fn poisson_cdf(k: i64, lambda: f64) -> f64 {
    if k < 0 {
        return 0.0;
    }
    let mut term = (-lambda).exp();
    let mut sum = term;
    for i in 1..=k {
        term *= lambda / i as f64;
        sum += term;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pmf_partial_sums_approach_one() {
        let lambda = 3.0;
        let total: f64 = (0..=60).map(|k| poisson_pmf(k, lambda)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pmf_zero_below_support() {
        assert_eq!(poisson_pmf(-1, 2.0), 0.0);
        assert_eq!(poisson_pmf(-5, 2.0), 0.0);
    }

    #[test]
    fn test_pmf_known_values() {
        // pmf(0, lambda) = exp(-lambda)
        assert!((poisson_pmf(0, 2.0) - (-2.0f64).exp()).abs() < 1e-12);
        // pmf(1, 2) = 2 exp(-2)
        assert!((poisson_pmf(1, 2.0) - 2.0 * (-2.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_pmf_large_k_stays_finite() {
        let p = poisson_pmf(500, 300.0);
        assert!(p.is_finite());
        assert!(p >= 0.0);
    }

    #[test]
    fn test_cdf_monotone_nondecreasing() {
        let lambda = 4.5;
        let mut prev = 0.0;
        for k in 0..=80 {
            let c = poisson_cdf(k, lambda);
            assert!(c >= prev - 1e-15);
            prev = c;
        }
        assert!((prev - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cdf_matches_pmf_sum() {
        let lambda = 7.25;
        for k in [0, 1, 5, 12] {
            let direct: f64 = (0..=k).map(|i| poisson_pmf(i, lambda)).sum();
            assert!((poisson_cdf(k, lambda) - direct).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cdf_below_support() {
        assert_eq!(poisson_cdf(-1, 3.0), 0.0);
    }
}
