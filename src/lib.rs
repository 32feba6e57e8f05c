//! Binary-chromosome genetic algorithm.
//!
//! Evolves a population of fixed-length bit-vectors toward a reference
//! pattern. Each stage of the algorithm is exposed as a standalone
//! operation so it can be exercised in isolation:
//!
//! - **Reference generation**: [`ga::create_reference_solution`]
//! - **Initialization**: [`ga::create_starting_population`]
//! - **Evaluation**: [`ga::calculate_fitness`]
//! - **Selection**: [`ga::select_individual_by_tournament`]
//! - **Crossover**: [`ga::breed_by_crossover`]
//! - **Mutation**: [`ga::randomly_mutate_population`]
//!
//! [`ga::GaRunner`] composes them into a generational loop and records
//! the best score of every generation.
//!
//! # Randomness
//!
//! Every stochastic operation takes an explicit `&mut R: Rng`. Use
//! [`random::create_rng`] with a fixed seed for reproducible runs.
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_chromosome_length(20)
//!     .with_population_size(40)
//!     .with_max_generations(30)
//!     .with_seed(7);
//! let result = GaRunner::run(&config).unwrap();
//! assert_eq!(result.best_score_history.len(), 31);
//! ```

pub mod error;
pub mod ga;
pub mod random;
