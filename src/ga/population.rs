//! Random population initialization.

use super::types::Population;
use crate::error::{GaError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates `individuals` random chromosomes of `length` genes.
///
/// Each individual independently draws a one-count `k` uniformly from
/// `0..=length`, sets its first `k` genes, then shuffles its own genes.
/// One-counts are therefore uniform over `[0, length]` rather than
/// binomially concentrated around `length / 2`.
///
/// # Errors
/// [`GaError::InvalidDimension`] if `individuals` or `length` is zero.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::create_starting_population;
/// use u_bitga::random::create_rng;
///
/// let mut rng = create_rng(3);
/// let pop = create_starting_population(6, 10, &mut rng).unwrap();
/// assert_eq!(pop.len(), 6);
/// assert_eq!(pop.chromosome_length(), 10);
/// ```
pub fn create_starting_population<R: Rng>(
    individuals: usize,
    length: usize,
    rng: &mut R,
) -> Result<Population> {
    if individuals == 0 {
        return Err(GaError::InvalidDimension(
            "population must have at least one individual".into(),
        ));
    }
    if length == 0 {
        return Err(GaError::InvalidDimension(
            "chromosome length must be positive".into(),
        ));
    }

    let mut population = Population::with_capacity(length, individuals);
    let mut genes = vec![false; length];
    for _ in 0..individuals {
        let ones = rng.random_range(0..=length);
        for (i, g) in genes.iter_mut().enumerate() {
            *g = i < ones;
        }
        genes.shuffle(rng);
        population.push_row(&genes)?;
    }
    Ok(population)
}
