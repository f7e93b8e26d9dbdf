use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug)]
pub enum StatsError {
    // Input validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient data: {got} observations (need at least {need})")]
    InsufficientData { need: usize, got: usize },

    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    // Mathematically undefined results
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    // Parameter domain errors
    #[error("Domain violation: {0}")]
    DomainViolation(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
