//! Binary-chromosome Genetic Algorithm.
//!
//! Individuals are fixed-length bit-vectors scored by how many genes
//! agree with a reference chromosome. Each stage is a free function over
//! [`Chromosome`] / [`Population`] values taking an explicit RNG, and
//! [`GaRunner`] composes them into the generational loop.
//!
//! # Key Types
//!
//! - [`Chromosome`]: One candidate solution
//! - [`Population`]: Dense `N×L` bit matrix of candidates
//! - [`GaConfig`]: Algorithm parameters (length, size, generations, mutation)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final generation and best-score history
//!
//! # Stages
//!
//! - [`create_reference_solution`]: balanced random target pattern
//! - [`create_starting_population`]: random initial population
//! - [`calculate_fitness`]: per-individual match counts
//! - [`select_individual_by_tournament`]: binary tournament selection
//! - [`breed_by_crossover`]: single-point crossover
//! - [`randomly_mutate_population`]: per-gene bit-flip mutation
//! - [`next_generation`]: one full selection → crossover → mutation step
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod fitness;
pub mod operators;
mod population;
mod reference;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
#[cfg(feature = "parallel")]
pub use fitness::calculate_fitness_parallel;
pub use fitness::{best_score, calculate_fitness, score_percentage};
pub use operators::{breed_by_crossover, crossover_at, randomly_mutate_population};
pub use population::create_starting_population;
pub use reference::create_reference_solution;
pub use runner::{next_generation, GaResult, GaRunner};
pub use selection::{select_individual_by_tournament, tournament_index};
pub use types::{Chromosome, Population};
