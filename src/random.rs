//! Seedable random source shared by all GA stages.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// Two generators created with the same seed yield identical streams,
/// so a whole GA run is reproducible from its seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG seeded from a fresh random value.
pub fn create_rng_from_entropy() -> StdRng {
    create_rng(rand::random())
}
