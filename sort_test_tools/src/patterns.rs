use std::env;

use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::StdRng;
// Deprecated upstream in favour of `rand_distr::Zipf`.
#[allow(deprecated)]
use zipf::ZipfDistribution;

/// Seed shared by every random pattern in this process.
///
/// Set `OVERRIDE_SEED` to reproduce a failure, the seed is part of every failure message.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Public ---

/// Uniformly distributed values over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly distributed values in `range`, lots of duplicates for small ranges.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Zipfian distributed values, a few values occur very often and most values rarely.
#[allow(deprecated)]
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    let mut rng = new_rng();

    let num_elements = len.clamp(1, i32::MAX as usize);
    let dist = ZipfDistribution::new(num_elements, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Either 0 or 1.
pub fn random_binary(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=1)
}

/// Sorted values with `percent` of them replaced by random values.
pub fn random_sorted(len: usize, percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::

    let mut v = ascending(len);
    let mut rng = new_rng();
    let replace = ((len as f64) * (percent / 100.0)).round() as usize;

    for _ in 0..replace.min(len) {
        let idx = rng.gen_range(0..len);
        v[idx] = rng.gen();
    }

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// `saw_count` ascending runs of roughly the same length.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let saw_len = (len / saw_count.max(1)).max(1);
    (0..len).map(|i| (i % saw_len) as i32).collect()
}

/// `saw_count` descending runs of roughly the same length.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let saw_len = (len / saw_count.max(1)).max(1);
    (0..len).map(|i| (saw_len - 1 - (i % saw_len)) as i32).collect()
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let half = len / 2;
    (0..half as i32)
        .chain((0..(len - half) as i32).rev())
        .collect()
}
