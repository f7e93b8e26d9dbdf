//! Binomial distribution mass and cumulative functions

use statrs::function::factorial::ln_binomial;

/// Binomial probability mass function
///
/// Returns 0 outside the support `0..=n` (zero-mass convention, not an
/// error). The mass is computed in log space so moderately large n
/// stays finite where raw factorials would overflow.
pub fn binomial_pmf(k: i64, n: u64, p: f64) -> f64 {
    if k < 0 || k as u64 > n {
        return 0.0;
    }
    let k = k as u64;
    // p = 0 and p = 1 are point masses; ln(p) would be -inf.
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    let ln_pmf = ln_binomial(n, k) + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln();
    ln_pmf.exp()
}

/// Binomial cumulative distribution function
///
/// Direct O(k) summation of the mass function; the product keeps n
/// small (n <= ~200) so no closed-form series is needed.
pub fn binomial_cdf(k: i64, n: u64, p: f64) -> f64 {
    if k < 0 {
        return 0.0;
    }
    let upper = (k as u64).min(n);
    (0..=upper).map(|i| binomial_pmf(i as i64, n, p)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pmf_sums_to_one() {
        for &(n, p) in &[(10u64, 0.3), (50, 0.5), (200, 0.01)] {
            let total: f64 = (0..=n).map(|k| binomial_pmf(k as i64, n, p)).sum();
            assert!((total - 1.0).abs() < 1e-10, "n={n} p={p} total={total}");
        }
    }

    #[test]
    fn test_pmf_zero_outside_support() {
        assert_eq!(binomial_pmf(-1, 10, 0.5), 0.0);
        assert_eq!(binomial_pmf(11, 10, 0.5), 0.0);
    }

    #[test]
    fn test_pmf_known_value() {
        // C(4,2) * 0.5^4 = 6/16
        assert!((binomial_pmf(2, 4, 0.5) - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_pmf_symmetric_at_half() {
        for k in 0..=20i64 {
            let a = binomial_pmf(k, 20, 0.5);
            let b = binomial_pmf(20 - k, 20, 0.5);
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pmf_point_masses() {
        assert_eq!(binomial_pmf(0, 10, 0.0), 1.0);
        assert_eq!(binomial_pmf(3, 10, 0.0), 0.0);
        assert_eq!(binomial_pmf(10, 10, 1.0), 1.0);
        assert_eq!(binomial_pmf(9, 10, 1.0), 0.0);
    }

    #[test]
    fn test_cdf_reaches_one() {
        assert!((binomial_cdf(10, 10, 0.3) - 1.0).abs() < 1e-10);
        // k beyond n clamps to the full sum
        assert!((binomial_cdf(25, 10, 0.3) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cdf_monotone() {
        let mut prev = 0.0;
        for k in 0..=30i64 {
            let c = binomial_cdf(k, 30, 0.7);
            assert!(c >= prev - 1e-15);
            prev = c;
        }
    }

    #[test]
    fn test_cdf_below_support() {
        assert_eq!(binomial_cdf(-1, 10, 0.5), 0.0);
    }
}
