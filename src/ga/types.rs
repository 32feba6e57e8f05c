//! Chromosome and population storage.
//!
//! A [`Chromosome`] is an owned, fixed-length bit-vector. A [`Population`]
//! stores `N` chromosomes of identical length `L` as one dense row-major
//! `N×L` bit matrix; row order carries no meaning beyond pairing with the
//! parallel score sequence returned by
//! [`calculate_fitness`](super::calculate_fitness).

use crate::error::{GaError, Result};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One candidate solution: an ordered sequence of binary genes.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Chromosome;
///
/// let c = Chromosome::from_bits(&[1, 0, 1, 1]);
/// assert_eq!(c.len(), 4);
/// assert_eq!(c.count_ones(), 3);
/// assert_eq!(c.complement(), Chromosome::from_bits(&[0, 1, 0, 0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Builds a chromosome from `0`/`1` values; any nonzero value is a `1`.
    pub fn from_bits(bits: &[u8]) -> Self {
        bits.iter().map(|&b| b != 0).collect()
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene slice.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Consumes the chromosome, returning its genes.
    pub fn into_genes(self) -> Vec<bool> {
        self.genes
    }

    /// Number of genes set to `1`.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Bitwise negation of every gene.
    pub fn complement(&self) -> Self {
        self.genes.iter().map(|&g| !g).collect()
    }

    /// Genes rendered as `0`/`1` values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl From<&[bool]> for Chromosome {
    fn from(genes: &[bool]) -> Self {
        Self::new(genes.to_vec())
    }
}

impl FromIterator<bool> for Chromosome {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.genes[index]
    }
}

impl AsRef<[bool]> for Chromosome {
    fn as_ref(&self) -> &[bool] {
        &self.genes
    }
}

/// A generation of chromosomes stored as a dense bit matrix.
///
/// Rows are individuals, columns are genes. Every row has exactly
/// [`chromosome_length`](Population::chromosome_length) genes; the
/// constructors reject rows of any other length.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{Chromosome, Population};
///
/// let mut pop = Population::new(3);
/// pop.push(&Chromosome::from_bits(&[1, 1, 0])).unwrap();
/// pop.push(&Chromosome::from_bits(&[0, 0, 0])).unwrap();
/// assert_eq!(pop.len(), 2);
/// assert_eq!(pop.row(0), &[true, true, false]);
/// assert!(pop.push(&Chromosome::from_bits(&[1])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PopulationRepr"))]
pub struct Population {
    genes: Vec<bool>,
    chromosome_length: usize,
    size: usize,
}

impl Population {
    /// Creates an empty population whose rows will have `chromosome_length` genes.
    pub fn new(chromosome_length: usize) -> Self {
        Self {
            genes: Vec::new(),
            chromosome_length,
            size: 0,
        }
    }

    /// Creates an empty population with room for `capacity` rows.
    pub fn with_capacity(chromosome_length: usize, capacity: usize) -> Self {
        Self {
            genes: Vec::with_capacity(chromosome_length * capacity),
            chromosome_length,
            size: 0,
        }
    }

    /// Builds a population from chromosomes that must all have
    /// `chromosome_length` genes.
    pub fn from_chromosomes<I>(chromosome_length: usize, chromosomes: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[bool]>,
    {
        let mut pop = Self::new(chromosome_length);
        for c in chromosomes {
            pop.push_row(c.as_ref())?;
        }
        Ok(pop)
    }

    /// Builds a population from rows of `0`/`1` values.
    pub fn from_bit_rows(chromosome_length: usize, rows: &[&[u8]]) -> Result<Self> {
        Self::from_chromosomes(
            chromosome_length,
            rows.iter().map(|r| Chromosome::from_bits(r)),
        )
    }

    /// Number of individuals (`N`).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of genes per individual (`L`).
    pub fn chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    /// Appends a copy of `chromosome` as a new row.
    pub fn push(&mut self, chromosome: &Chromosome) -> Result<()> {
        self.push_row(chromosome.genes())
    }

    pub(crate) fn push_row(&mut self, row: &[bool]) -> Result<()> {
        if row.len() != self.chromosome_length {
            return Err(GaError::length_mismatch(
                "chromosome",
                self.chromosome_length,
                row.len(),
            ));
        }
        self.genes.extend_from_slice(row);
        self.size += 1;
        Ok(())
    }

    /// Drops rows beyond the first `size`. No-op if already smaller.
    pub fn truncate(&mut self, size: usize) {
        if size < self.size {
            self.size = size;
            self.genes.truncate(size * self.chromosome_length);
        }
    }

    /// Genes of individual `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn row(&self, index: usize) -> &[bool] {
        assert!(index < self.size, "row index {index} out of range");
        let start = index * self.chromosome_length;
        &self.genes[start..start + self.chromosome_length]
    }

    /// Genes of individual `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&[bool]> {
        (index < self.size).then(|| self.row(index))
    }

    /// Independent copy of individual `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn chromosome(&self, index: usize) -> Chromosome {
        Chromosome::from(self.row(index))
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        (0..self.size).map(move |i| self.row(i))
    }

    /// Copies every row out as an owned chromosome.
    pub fn to_chromosomes(&self) -> Vec<Chromosome> {
        self.rows().map(Chromosome::from).collect()
    }

    /// The whole matrix in row-major order.
    pub fn as_flat(&self) -> &[bool] {
        &self.genes
    }

    pub(crate) fn as_flat_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }
}

/// Unchecked wire shape of a [`Population`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PopulationRepr {
    genes: Vec<bool>,
    chromosome_length: usize,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<PopulationRepr> for Population {
    type Error = GaError;

    fn try_from(repr: PopulationRepr) -> Result<Self> {
        let expected = repr
            .size
            .checked_mul(repr.chromosome_length)
            .ok_or_else(|| {
                GaError::InvalidDimension(format!(
                    "{} rows of {} genes overflow",
                    repr.size, repr.chromosome_length
                ))
            })?;
        if repr.genes.len() != expected {
            return Err(GaError::length_mismatch(
                "gene matrix",
                expected,
                repr.genes.len(),
            ));
        }
        Ok(Self {
            genes: repr.genes,
            chromosome_length: repr.chromosome_length,
            size: repr.size,
        })
    }
}
