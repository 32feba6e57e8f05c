//! Fitness evaluation against a reference chromosome.
//!
//! The score of an individual is the number of gene positions where it
//! agrees with the reference, so scores lie in `[0, L]` and higher is
//! better.

use super::types::{Chromosome, Population};
use crate::error::{GaError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores every individual of `population` against `reference`.
///
/// Element `i` of the result is the count of positions `j` with
/// `population[i][j] == reference[j]`. Inputs are not modified. An empty
/// population yields an empty result and a zero-length chromosome scores 0.
///
/// # Errors
/// [`GaError::InvalidDimension`] if the reference length differs from
/// the population's chromosome length.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{calculate_fitness, Chromosome, Population};
///
/// let reference = Chromosome::from_bits(&[1, 1, 0, 0]);
/// let pop = Population::from_bit_rows(4, &[&[1, 1, 0, 0], &[0, 0, 1, 1], &[1, 0, 0, 1]]).unwrap();
/// assert_eq!(calculate_fitness(&reference, &pop).unwrap(), vec![4, 0, 2]);
/// ```
pub fn calculate_fitness(reference: &Chromosome, population: &Population) -> Result<Vec<usize>> {
    check_reference(reference, population)?;
    Ok(population
        .rows()
        .map(|row| matching_genes(reference.genes(), row))
        .collect())
}

/// Same as [`calculate_fitness`], scoring rows in parallel with rayon.
///
/// Evaluation draws no randomness, so the result is identical to the
/// sequential version.
#[cfg(feature = "parallel")]
pub fn calculate_fitness_parallel(
    reference: &Chromosome,
    population: &Population,
) -> Result<Vec<usize>> {
    check_reference(reference, population)?;
    let length = population.chromosome_length();
    if length == 0 {
        return Ok(vec![0; population.len()]);
    }
    Ok(population
        .as_flat()
        .par_chunks_exact(length)
        .map(|row| matching_genes(reference.genes(), row))
        .collect())
}

/// Dispatches to the parallel evaluator when requested.
#[cfg(feature = "parallel")]
pub(crate) fn evaluate(
    reference: &Chromosome,
    population: &Population,
    parallel: bool,
) -> Result<Vec<usize>> {
    if parallel {
        calculate_fitness_parallel(reference, population)
    } else {
        calculate_fitness(reference, population)
    }
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn evaluate(
    reference: &Chromosome,
    population: &Population,
    _parallel: bool,
) -> Result<Vec<usize>> {
    calculate_fitness(reference, population)
}

/// Index and value of the highest score; the first index wins ties.
///
/// Returns `None` for an empty score sequence.
pub fn best_score(scores: &[usize]) -> Option<(usize, usize)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, s)| match best {
            Some((_, b)) if b >= s => best,
            _ => Some((i, s)),
        })
}

/// Expresses `score` as a percentage of `chromosome_length`.
///
/// A zero-length chromosome reports 0.
pub fn score_percentage(score: usize, chromosome_length: usize) -> f64 {
    if chromosome_length == 0 {
        return 0.0;
    }
    score as f64 * 100.0 / chromosome_length as f64
}

fn check_reference(reference: &Chromosome, population: &Population) -> Result<()> {
    if reference.len() != population.chromosome_length() {
        return Err(GaError::length_mismatch(
            "reference",
            population.chromosome_length(),
            reference.len(),
        ));
    }
    Ok(())
}

fn matching_genes(reference: &[bool], row: &[bool]) -> usize {
    reference.iter().zip(row).filter(|(a, b)| a == b).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::create_starting_population;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn reference() -> Chromosome {
        Chromosome::from_bits(&[1, 1, 0, 0, 0, 0, 1, 0, 1, 1])
    }

    #[test]
    fn test_reference_scores_maximum() {
        let r = reference();
        let pop = Population::from_chromosomes(10, [&r]).unwrap();
        assert_eq!(calculate_fitness(&r, &pop).unwrap(), vec![10]);
    }

    #[test]
    fn test_complement_scores_zero() {
        let r = reference();
        let pop = Population::from_chromosomes(10, [r.complement()]).unwrap();
        assert_eq!(calculate_fitness(&r, &pop).unwrap(), vec![0]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let r = reference();
        let mut rng = create_rng(42);
        let mut pop = create_starting_population(6, 10, &mut rng).unwrap();
        pop.truncate(4);
        pop.push(&r).unwrap();
        pop.push(&r.complement()).unwrap();

        let scores = calculate_fitness(&r, &pop).unwrap();
        assert_eq!(scores.len(), 6);
        assert_eq!(scores[4], 10);
        assert_eq!(scores[5], 0);
        assert!(scores.iter().all(|&s| s <= 10));
    }

    #[test]
    fn test_empty_population() {
        let pop = Population::new(10);
        assert!(calculate_fitness(&reference(), &pop).unwrap().is_empty());
    }

    #[test]
    fn test_zero_length() {
        let pop = Population::from_chromosomes(0, vec![Chromosome::default(); 3]).unwrap();
        let scores = calculate_fitness(&Chromosome::default(), &pop).unwrap();
        assert_eq!(scores, vec![0, 0, 0]);
    }

    #[test]
    fn test_length_mismatch() {
        let pop = Population::from_bit_rows(3, &[&[1, 0, 1]]).unwrap();
        let err = calculate_fitness(&reference(), &pop).unwrap_err();
        assert!(matches!(err, GaError::InvalidDimension(_)));
    }

    #[test]
    fn test_inputs_untouched() {
        let r = reference();
        let mut rng = create_rng(1);
        let pop = create_starting_population(5, 10, &mut rng).unwrap();
        let before = pop.clone();
        calculate_fitness(&r, &pop).unwrap();
        assert_eq!(pop, before);
        assert_eq!(r, reference());
    }

    #[test]
    fn test_best_score() {
        assert_eq!(best_score(&[]), None);
        assert_eq!(best_score(&[3]), Some((0, 3)));
        assert_eq!(best_score(&[1, 7, 2, 7]), Some((1, 7)));
        assert_eq!(best_score(&[0, 0]), Some((0, 0)));
    }

    #[test]
    fn test_score_percentage() {
        assert!((score_percentage(5, 10) - 50.0).abs() < 1e-12);
        assert!((score_percentage(75, 75) - 100.0).abs() < 1e-12);
        assert_eq!(score_percentage(0, 0), 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = create_rng(5);
        let r = crate::ga::create_reference_solution(40, &mut rng).unwrap();
        let pop = create_starting_population(300, 40, &mut rng).unwrap();
        assert_eq!(
            calculate_fitness(&r, &pop).unwrap(),
            calculate_fitness_parallel(&r, &pop).unwrap()
        );
    }

    fn population_strategy() -> impl Strategy<Value = (Vec<bool>, Vec<Vec<bool>>)> {
        (0usize..24).prop_flat_map(|len| {
            (
                prop::collection::vec(any::<bool>(), len),
                prop::collection::vec(prop::collection::vec(any::<bool>(), len), 0..12),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_scores_within_bounds((r, rows) in population_strategy()) {
            let len = r.len();
            let reference = Chromosome::new(r);
            let pop = Population::from_chromosomes(len, &rows).unwrap();
            let scores = calculate_fitness(&reference, &pop).unwrap();
            prop_assert_eq!(scores.len(), rows.len());
            prop_assert!(scores.iter().all(|&s| s <= len));
        }

        #[test]
        fn prop_identical_rows_score_equally((r, rows) in population_strategy()) {
            prop_assume!(!rows.is_empty());
            let len = r.len();
            let reference = Chromosome::new(r);
            let doubled: Vec<&Vec<bool>> = rows.iter().chain(rows.iter()).collect();
            let pop = Population::from_chromosomes(len, doubled).unwrap();
            let scores = calculate_fitness(&reference, &pop).unwrap();
            let (first, second) = scores.split_at(rows.len());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_complement_scores_sum_to_length((r, rows) in population_strategy()) {
            let len = r.len();
            let reference = Chromosome::new(r);
            let pop = Population::from_chromosomes(len, &rows).unwrap();
            let flipped: Vec<Chromosome> =
                rows.iter().map(|g| Chromosome::from(g.as_slice()).complement()).collect();
            let inverse = Population::from_chromosomes(len, &flipped).unwrap();
            let a = calculate_fitness(&reference, &pop).unwrap();
            let b = calculate_fitness(&reference, &inverse).unwrap();
            for (x, y) in a.iter().zip(&b) {
                prop_assert_eq!(x + y, len);
            }
        }
    }
}
