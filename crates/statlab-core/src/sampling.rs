//! Pseudo-random sample generation
//!
//! Normal (Box-Muller), Binomial (Bernoulli counting), and Poisson
//! (Knuth's product-of-uniforms) variates, built on an injectable
//! uniform source so tests can seed or script the stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{StatsError, StatsResult};
use crate::types::DistributionParams;

/// Source of uniform draws in [0, 1)
///
/// The generators below consume one draw per Bernoulli trial and at
/// least one per variate, so implementations must be cheap to call.
/// Sources are either instantiated per call or otherwise not shared
/// across threads; nothing here synchronizes.
pub trait UniformSource {
    /// Next uniform draw in [0, 1)
    fn next_uniform(&mut self) -> f64;
}

/// Uniform source backed by rand's StdRng
pub struct PrngSource {
    rng: StdRng,
}

impl PrngSource {
    /// Entropy-seeded source
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible runs
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for PrngSource {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Generate `size` samples from the given distribution
///
/// Validates parameters first; `size` must be at least 1. Counts from
/// the discrete distributions are widened to f64 so every distribution
/// yields the same sequence type.
pub fn sample_distribution(
    params: &DistributionParams,
    size: usize,
    source: &mut dyn UniformSource,
) -> StatsResult<Vec<f64>> {
    params.validate()?;
    if size == 0 {
        return Err(StatsError::InvalidInput(
            "sample size must be at least 1".into(),
        ));
    }

    let samples = match *params {
        DistributionParams::Normal { mean, std } => sample_normal(mean, std, size, source),
        DistributionParams::Binomial { n, p } => sample_binomial(n, p, size, source)
            .into_iter()
            .map(|k| k as f64)
            .collect(),
        DistributionParams::Poisson { lambda } => sample_poisson(lambda, size, source)
            .into_iter()
            .map(|k| k as f64)
            .collect(),
    };
    Ok(samples)
}

/// Normal variates via the Box-Muller transform
///
/// Consumes uniform pairs (u1, u2) and yields two variates per pair:
/// z1 = sqrt(-2 ln u1) cos(2 pi u2) and z2 with sin. For odd `size`
/// the final second variate is discarded.
pub fn sample_normal(
    mean: f64,
    std: f64,
    size: usize,
    source: &mut dyn UniformSource,
) -> Vec<f64> {
    let mut samples = Vec::with_capacity(size);
    while samples.len() < size {
        // ln(0) is -inf; redraw the radial uniform until positive.
        let u1 = loop {
            let u = source.next_uniform();
            if u > 0.0 {
                break u;
            }
        };
        let u2 = source.next_uniform();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;
        samples.push(mean + r * theta.cos() * std);
        if samples.len() < size {
            samples.push(mean + r * theta.sin() * std);
        }
    }
    samples
}

/// Binomial variates by counting Bernoulli successes
///
/// O(size * n): one uniform per trial.
pub fn sample_binomial(n: u64, p: f64, size: usize, source: &mut dyn UniformSource) -> Vec<u64> {
    (0..size)
        .map(|_| (0..n).filter(|_| source.next_uniform() < p).count() as u64)
        .collect()
}

/// Poisson variates via Knuth's inverse-transform algorithm
///
/// Multiplies successive uniforms until the running product drops to
/// exp(-lambda) or below; the variate is the count of multiplications
/// minus one. The loop has no upper bound: expected iterations grow
/// linearly with lambda, and exp(-lambda) underflows to zero near
/// lambda ~ 745, so bounding very large rates is the caller's job.
pub fn sample_poisson(lambda: f64, size: usize, source: &mut dyn UniformSource) -> Vec<u64> {
    let limit = (-lambda).exp();
    (0..size)
        .map(|_| {
            let mut k: u64 = 0;
            let mut product = 1.0;
            loop {
                k += 1;
                product *= source.next_uniform();
                if product <= limit {
                    break;
                }
            }
            k - 1
        })
        .collect()
}
