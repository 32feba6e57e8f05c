//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::{check_probability, GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the binary genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.chromosome_length, 75);
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.max_generations, 200);
/// assert_eq!(config.mutation_probability, 0.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_chromosome_length(40)
///     .with_population_size(100)
///     .with_mutation_probability(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of genes per chromosome (`L`). Must be at least 2 so that
    /// crossover has an interior point.
    pub chromosome_length: usize,

    /// Number of individuals per generation (`N`).
    ///
    /// Children are bred in pairs; for odd sizes the surplus child of the
    /// last pair is discarded.
    pub population_size: usize,

    /// Number of generations to run (`G`). The run always executes exactly
    /// this many generations; there is no early stopping.
    pub max_generations: usize,

    /// Per-gene flip probability applied once per generation (0.0–1.0).
    ///
    /// `0.0` (the default) disables mutation, leaving selection and
    /// crossover as the only variation.
    pub mutation_probability: f64,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect when the `parallel` feature is enabled. Results
    /// are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            chromosome_length: 75,
            population_size: 500,
            max_generations: 200,
            mutation_probability: 0.0,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation probability.
    ///
    /// The value is stored as given; [`validate`](Self::validate) rejects
    /// values outside `[0, 1]`.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`GaError::InvalidConfig`] for a chromosome length below 2 or an
    ///   empty population.
    /// - [`GaError::InvalidProbability`] for a mutation probability outside
    ///   `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.chromosome_length < 2 {
            return Err(GaError::InvalidConfig(
                "chromosome_length must be at least 2".into(),
            ));
        }
        if self.population_size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        check_probability(self.mutation_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.chromosome_length, 75);
        assert_eq!(config.population_size, 500);
        assert_eq!(config.max_generations, 200);
        assert!((config.mutation_probability - 0.0).abs() < 1e-15);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_chromosome_length(10)
            .with_population_size(6)
            .with_max_generations(50)
            .with_mutation_probability(0.02)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.chromosome_length, 10);
        assert_eq!(config.population_size, 6);
        assert_eq!(config.max_generations, 50);
        assert!((config.mutation_probability - 0.02).abs() < 1e-15);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_short_chromosome() {
        for n in [0, 1] {
            let config = GaConfig::default().with_chromosome_length(n);
            assert!(matches!(config.validate(), Err(GaError::InvalidConfig(_))));
        }
        assert!(GaConfig::default().with_chromosome_length(2).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(config.validate(), Err(GaError::InvalidConfig(_))));
        assert!(GaConfig::default().with_population_size(1).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations_allowed() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_probability() {
        for p in [-0.5, 1.5, f64::NAN] {
            let config = GaConfig::default().with_mutation_probability(p);
            assert!(matches!(
                config.validate(),
                Err(GaError::InvalidProbability(_))
            ));
        }
        for p in [0.0, 0.005, 0.05, 1.0] {
            let config = GaConfig::default().with_mutation_probability(p);
            assert!(config.validate().is_ok());
        }
    }
}
