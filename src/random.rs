//! Seedable random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
///
/// # Examples
///
/// ```
/// use queen_anneal::random::create_rng;
/// use rand::Rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from the seed if given, otherwise from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
