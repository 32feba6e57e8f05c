//! Bit-string genetic operators.
//!
//! # Crossover
//!
//! - [`breed_by_crossover`]: single-point crossover at a random interior locus
//! - [`crossover_at`]: the same splice at a caller-chosen locus
//!
//! # Mutation
//!
//! - [`randomly_mutate_population`]: independent per-gene bit flips over the
//!   whole population matrix
//!
//! All operators return new values and never modify their inputs.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::{Chromosome, Population};
use crate::error::{check_probability, GaError, Result};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Draws a crossover point `c` uniformly from `1..L` (never `0` or `L`)
/// and returns the pair produced by [`crossover_at`].
///
/// # Errors
/// [`GaError::InvalidDimension`] if the parents differ in length or are
/// shorter than 2 genes.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{breed_by_crossover, Chromosome};
/// use u_bitga::random::create_rng;
///
/// let p1 = Chromosome::from_bits(&[1, 1, 1, 1]);
/// let p2 = Chromosome::from_bits(&[0, 0, 0, 0]);
/// let (a, b) = breed_by_crossover(&p1, &p2, &mut create_rng(0)).unwrap();
/// assert_eq!(a.count_ones() + b.count_ones(), 4);
/// assert!(a[0] && !b[0]);
/// ```
pub fn breed_by_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> Result<(Chromosome, Chromosome)> {
    let n = check_parents(parent1, parent2)?;
    let point = rng.random_range(1..n);
    log::trace!("crossover at locus {point} of {n}");
    crossover_at(parent1, parent2, point)
}

/// Splices two parents at `point`.
///
/// Child A is `parent1[..point]` followed by `parent2[point..]`; child B is
/// `parent2[..point]` followed by `parent1[point..]`. At every locus the two
/// children together carry exactly the two parental genes.
///
/// # Errors
/// [`GaError::InvalidDimension`] if the parents differ in length, are
/// shorter than 2 genes, or `point` is outside `1..L`.
pub fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    point: usize,
) -> Result<(Chromosome, Chromosome)> {
    let n = check_parents(parent1, parent2)?;
    if point == 0 || point >= n {
        return Err(GaError::InvalidDimension(format!(
            "crossover point {point} outside 1..{n}"
        )));
    }

    let (head1, tail1) = parent1.genes().split_at(point);
    let (head2, tail2) = parent2.genes().split_at(point);

    let child_a: Chromosome = head1.iter().chain(tail2).copied().collect();
    let child_b: Chromosome = head2.iter().chain(tail1).copied().collect();
    Ok((child_a, child_b))
}

/// Returns the common parent length, which must be at least 2.
fn check_parents(parent1: &Chromosome, parent2: &Chromosome) -> Result<usize> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(GaError::length_mismatch("parent2", n, parent2.len()));
    }
    if n < 2 {
        return Err(GaError::InvalidDimension(format!(
            "crossover requires at least 2 genes, got {n}"
        )));
    }
    Ok(n)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips each gene of `population` independently with `probability`.
///
/// For every gene a uniform value `u` in `[0, 1)` is drawn and the gene is
/// negated when `u <= probability`. The whole `N×L` matrix is processed in
/// row-major order, so each gene's decision is independent of all others
/// and the expected number of flips per individual is `probability * L`.
///
/// `probability == 0.0` returns an exact copy without drawing; `1.0`
/// negates every gene.
///
/// # Errors
/// [`GaError::InvalidProbability`] if `probability` is outside `[0, 1]`
/// or not finite.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{randomly_mutate_population, Population};
/// use u_bitga::random::create_rng;
///
/// let pop = Population::from_bit_rows(3, &[&[1, 0, 1]]).unwrap();
/// let flipped = randomly_mutate_population(&pop, 1.0, &mut create_rng(0)).unwrap();
/// assert_eq!(flipped.row(0), &[false, true, false]);
/// ```
pub fn randomly_mutate_population<R: Rng>(
    population: &Population,
    probability: f64,
    rng: &mut R,
) -> Result<Population> {
    check_probability(probability)?;

    let mut mutated = population.clone();
    if probability == 0.0 {
        return Ok(mutated);
    }

    for gene in mutated.as_flat_mut() {
        if rng.random::<f64>() <= probability {
            *gene = !*gene;
        }
    }
    Ok(mutated)
}

// ============================================================================
// Tests
// ============================================================================
