//! statlab-core: pure statistical computation engine
//!
//! Distribution densities and cumulatives, pseudo-random sample
//! generation, hypothesis tests, simple linear regression, and
//! delimited-text ingestion. Every function is pure and synchronous;
//! callers own transport, display precision, and rate limiting.

pub mod distributions;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod sampling;
pub mod tests;
pub mod types;

pub use errors::{StatsError, StatsResult};
pub use types::*;
