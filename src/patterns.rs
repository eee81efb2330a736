//! Input patterns for tests, benchmarks and the experiment mode of the CLI.
//!
//! All random patterns are derived from one per-process seed, see [`random_init_seed`].

use std::env;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = match env::var("SORT_SEED").ok().and_then(|s| s.parse().ok()) {
        Some(seed) => seed,
        None => thread_rng().gen(),
    };
    // Always report the seed to ensure reproducibility of failures.
    log::info!("pattern seed: {seed} (set SORT_SEED to reproduce)");
    seed
});

/// Returns the seed shared by all random patterns of this process.
///
/// Taken from the `SORT_SEED` environment variable if it holds a valid `u64`, otherwise drawn at
/// random the first time it is requested.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// Upper bound for values that depend on `len`, kept inside the `i32` domain.
fn len_bound(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Uniformly random values over the whole `i32` domain.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly random values in `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random values in `0..len`, so the expected number of duplicates grows with `len`.
pub fn random_modulo(len: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    random_uniform(len, 0..len_bound(len))
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len_bound(len)).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len_bound(len)).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// `saw_count` consecutive sorted runs, alternating between ascending and descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 || saw_count == 0 {
        return random(len);
    }

    let mut v = random(len);
    let chunk_len = len.div_ceil(saw_count);
    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort();
        } else {
            chunk.sort_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Zipf distributed values in `1..=len`, small values are the most frequent.
///
/// # Panics
///
/// Panics if `exponent` is not positive.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let Ok(dist) = ZipfDistribution::new(len, exponent) else {
        panic!("invalid zipf exponent {exponent}");
    };

    let mut rng = new_rng();
    (0..len)
        .map(|_| i32::try_from(dist.sample(&mut rng)).unwrap_or(i32::MAX))
        .collect()
}
