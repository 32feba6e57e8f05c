//! Error type shared by all GA operations.

use thiserror::Error;

/// Contract violations reported by GA operations.
///
/// All operations are deterministic given their random draws, so every
/// error is a caller bug, never a transient condition. An operation that
/// fails leaves its inputs untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// Chromosome lengths disagree, or a length is too small for the operation.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A probability lies outside `[0, 1]` or is not finite.
    #[error("invalid probability {0}: must lie in [0, 1]")]
    InvalidProbability(f64),

    /// Selection was attempted on a population with no individuals.
    #[error("cannot select from an empty population")]
    EmptyPopulation,

    /// A [`GaConfig`](crate::ga::GaConfig) parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GaError>;

impl GaError {
    pub(crate) fn length_mismatch(what: &str, expected: usize, actual: usize) -> Self {
        GaError::InvalidDimension(format!(
            "{what} has length {actual}, expected {expected}"
        ))
    }
}

/// Checks that `p` is a finite probability.
pub(crate) fn check_probability(p: f64) -> Result<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GaError::InvalidProbability(p))
    }
}
