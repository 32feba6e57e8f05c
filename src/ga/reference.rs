//! Target pattern generation.

use super::types::Chromosome;
use crate::error::{GaError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates a random reference chromosome of `length` genes.
///
/// The result holds exactly `length / 2` ones (integer division) and the
/// remaining genes zero, with positions permuted uniformly at random. For
/// odd lengths the zeros therefore outnumber the ones by one.
///
/// # Errors
/// [`GaError::InvalidDimension`] if `length == 0`.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::create_reference_solution;
/// use u_bitga::random::create_rng;
///
/// let mut rng = create_rng(1);
/// let reference = create_reference_solution(10, &mut rng).unwrap();
/// assert_eq!(reference.len(), 10);
/// assert_eq!(reference.count_ones(), 5);
/// ```
pub fn create_reference_solution<R: Rng>(length: usize, rng: &mut R) -> Result<Chromosome> {
    if length == 0 {
        return Err(GaError::InvalidDimension(
            "reference length must be positive".into(),
        ));
    }

    let ones = length / 2;
    let mut genes: Vec<bool> = (0..length).map(|i| i < ones).collect();
    genes.shuffle(rng);
    Ok(Chromosome::new(genes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_even_length_is_balanced() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let r = create_reference_solution(10, &mut rng).unwrap();
            assert_eq!(r.len(), 10);
            assert_eq!(r.count_ones(), 5);
        }
    }

    #[test]
    fn test_odd_length_truncates_ones() {
        let mut rng = create_rng(42);
        let r = create_reference_solution(7, &mut rng).unwrap();
        assert_eq!(r.len(), 7);
        assert_eq!(r.count_ones(), 3);

        let r = create_reference_solution(1, &mut rng).unwrap();
        assert_eq!(r.to_bits(), vec![0]);
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut rng = create_rng(42);
        assert!(matches!(
            create_reference_solution(0, &mut rng),
            Err(GaError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_positions_are_shuffled() {
        let mut rng = create_rng(42);
        // Every position should hold a one at least once over many draws.
        let mut seen = [false; 12];
        for _ in 0..200 {
            let r = create_reference_solution(12, &mut rng).unwrap();
            for (i, &g) in r.genes().iter().enumerate() {
                seen[i] |= g;
            }
        }
        assert!(seen.iter().all(|&s| s), "positions never set: {seen:?}");
    }

    #[test]
    fn test_seed_reproducible() {
        let a = create_reference_solution(30, &mut create_rng(9)).unwrap();
        let b = create_reference_solution(30, &mut create_rng(9)).unwrap();
        assert_eq!(a, b);
    }
}
