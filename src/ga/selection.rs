//! Binary tournament selection.
//!
//! Two competitors are drawn uniformly with replacement and the one with
//! the strictly higher score wins. On a tie the first-drawn competitor
//! wins, so the outcome is fully determined by the two index draws.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Chromosome, Population};
use crate::error::{GaError, Result};
use rand::Rng;

/// Picks the winning index of one binary tournament over `scores`.
///
/// Draws `a` then `b` uniformly from `0..scores.len()` (the same index may
/// be drawn twice) and returns `b` only if `scores[b] > scores[a]`.
///
/// # Errors
/// [`GaError::EmptyPopulation`] if `scores` is empty.
pub fn tournament_index<R: Rng>(scores: &[usize], rng: &mut R) -> Result<usize> {
    let n = scores.len();
    if n == 0 {
        return Err(GaError::EmptyPopulation);
    }

    let first = rng.random_range(0..n);
    let second = rng.random_range(0..n);
    if scores[second] > scores[first] {
        Ok(second)
    } else {
        Ok(first)
    }
}

/// Selects one parent by binary tournament.
///
/// Returns an independent copy of the winner, so the caller may overwrite
/// `population` while still holding the parent.
///
/// # Errors
/// - [`GaError::EmptyPopulation`] if `population` has no individuals.
/// - [`GaError::InvalidDimension`] if `scores` is not parallel to `population`.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{select_individual_by_tournament, Population};
/// use u_bitga::random::create_rng;
///
/// let pop = Population::from_bit_rows(2, &[&[0, 0], &[1, 1]]).unwrap();
/// let mut rng = create_rng(42);
/// let parent = select_individual_by_tournament(&pop, &[0, 2], &mut rng).unwrap();
/// assert_eq!(parent.len(), 2);
/// ```
pub fn select_individual_by_tournament<R: Rng>(
    population: &Population,
    scores: &[usize],
    rng: &mut R,
) -> Result<Chromosome> {
    if population.is_empty() {
        return Err(GaError::EmptyPopulation);
    }
    if scores.len() != population.len() {
        return Err(GaError::length_mismatch(
            "score sequence",
            population.len(),
            scores.len(),
        ));
    }

    let winner = tournament_index(scores, rng)?;
    Ok(population.chromosome(winner))
}
