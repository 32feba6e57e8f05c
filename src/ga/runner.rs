//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → (selection → crossover → mutation →
//! evaluation) × G.

use super::config::GaConfig;
use super::fitness::{best_score, evaluate, score_percentage};
use super::operators::{breed_by_crossover, randomly_mutate_population};
use super::population::create_starting_population;
use super::reference::create_reference_solution;
use super::selection::select_individual_by_tournament;
use super::types::{Chromosome, Population};
use crate::error::{check_probability, GaError, Result};
use crate::random::{create_rng, create_rng_from_entropy};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a GA run.
///
/// Holds the final generation together with the per-generation history
/// of best scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaResult {
    /// The target chromosome fitness was measured against.
    pub reference: Chromosome,

    /// The last generation.
    pub population: Population,

    /// Fitness of each individual in `population`.
    pub scores: Vec<usize>,

    /// Highest-scoring individual of the last generation (first on ties).
    pub best: Chromosome,

    /// Score of `best`.
    pub best_score: usize,

    /// Number of generations executed.
    pub generations: usize,

    /// Best score of each generation as a percentage of the chromosome
    /// length. Entry 0 is the initial population, so the length is
    /// `generations + 1`.
    ///
    /// There is no elitism, so the sequence need not be monotonic.
    pub best_score_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_chromosome_length(16)
///     .with_population_size(30)
///     .with_max_generations(20)
///     .with_mutation_probability(0.01)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.generations, 20);
/// assert!(result.best_score <= 16);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA against a freshly generated reference solution.
    ///
    /// The reference is drawn from the same seeded RNG as the rest of the
    /// run, so a fixed seed reproduces the whole result.
    ///
    /// # Errors
    /// Any error from [`GaConfig::validate`].
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng_from_entropy(),
        };
        let reference = create_reference_solution(config.chromosome_length, &mut rng)?;
        Self::evolve(config, reference, &mut rng)
    }

    /// Runs the GA against a caller-supplied reference solution.
    ///
    /// # Errors
    /// - Any error from [`GaConfig::validate`].
    /// - [`GaError::InvalidDimension`] if `reference` does not have
    ///   `config.chromosome_length` genes.
    pub fn run_with_reference(config: &GaConfig, reference: &Chromosome) -> Result<GaResult> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng_from_entropy(),
        };
        Self::evolve(config, reference.clone(), &mut rng)
    }

    /// Runs the GA drawing every random value from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        config: &GaConfig,
        reference: Chromosome,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;
        Self::evolve(config, reference, rng)
    }

    /// Generational loop over an already validated `config`.
    fn evolve<R: Rng>(config: &GaConfig, reference: Chromosome, rng: &mut R) -> Result<GaResult> {
        let length = config.chromosome_length;
        if reference.len() != length {
            return Err(GaError::length_mismatch("reference", length, reference.len()));
        }

        log::info!(
            "starting GA: length={} population={} generations={} mutation={}",
            length,
            config.population_size,
            config.max_generations,
            config.mutation_probability
        );

        // 1. Initialize and evaluate
        let mut population = create_starting_population(config.population_size, length, rng)?;
        let mut scores = evaluate(&reference, &population, config.parallel)?;

        let mut best_score_history = Vec::with_capacity(config.max_generations + 1);
        best_score_history.push(generation_best(&scores, length)?);

        // 2. Generational loop
        for gen in 0..config.max_generations {
            population = next_generation(&population, &scores, config.mutation_probability, rng)?;
            scores = evaluate(&reference, &population, config.parallel)?;

            let pct = generation_best(&scores, length)?;
            best_score_history.push(pct);
            log::debug!("generation {}: best {:.1}%", gen + 1, pct);
        }

        let (best_idx, best) = best_score(&scores).ok_or(GaError::EmptyPopulation)?;
        log::info!(
            "GA finished after {} generations: best {}/{}",
            config.max_generations,
            best,
            length
        );

        Ok(GaResult {
            best: population.chromosome(best_idx),
            best_score: best,
            reference,
            population,
            scores,
            generations: config.max_generations,
            best_score_history,
        })
    }
}

/// Breeds the next generation from the current one.
///
/// Pairs of parents are chosen by independent binary tournaments over
/// the current `scores`, which are not updated while breeding. Each pair
/// yields two children; the buffer is filled to `population.len()` and the
/// surplus child of an odd-sized population is discarded. When
/// `mutation_probability > 0` the bred population is then mutated.
///
/// # Errors
/// - [`GaError::EmptyPopulation`] if `population` is empty.
/// - [`GaError::InvalidDimension`] if `scores` is not parallel to
///   `population` or chromosomes are shorter than 2 genes.
/// - [`GaError::InvalidProbability`] for a bad `mutation_probability`.
pub fn next_generation<R: Rng>(
    population: &Population,
    scores: &[usize],
    mutation_probability: f64,
    rng: &mut R,
) -> Result<Population> {
    check_probability(mutation_probability)?;
    let size = population.len();
    if size == 0 {
        return Err(GaError::EmptyPopulation);
    }

    let mut next = Population::with_capacity(population.chromosome_length(), size + 1);
    while next.len() < size {
        let parent1 = select_individual_by_tournament(population, scores, rng)?;
        let parent2 = select_individual_by_tournament(population, scores, rng)?;
        let (child_a, child_b) = breed_by_crossover(&parent1, &parent2, rng)?;
        next.push(&child_a)?;
        next.push(&child_b)?;
    }
    next.truncate(size);

    if mutation_probability > 0.0 {
        next = randomly_mutate_population(&next, mutation_probability, rng)?;
    }
    Ok(next)
}

fn generation_best(scores: &[usize], length: usize) -> Result<f64> {
    let (_, best) = best_score(scores).ok_or(GaError::EmptyPopulation)?;
    Ok(score_percentage(best, length))
}

// ============================================================================
// Tests
// ============================================================================
