use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `0, 1, .., n - 1`: the worst insertion order for an unbalanced tree.
pub fn sequential_keys(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

pub fn shuffled_keys<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u64> {
    let mut keys = sequential_keys(n);
    keys.shuffle(rng);
    keys
}

/// Strictly increasing keys with random gaps of `1..=max_gap`.
pub fn sorted_distinct_keys<R: Rng + ?Sized>(rng: &mut R, n: usize, max_gap: u64) -> Vec<u64> {
    debug_assert!(max_gap >= 1);
    let mut next = 0_u64;
    (0..n)
        .map(|_| {
            next += rng.random_range(1..=max_gap);
            next
        })
        .collect()
}

/// Sorted keys where every value repeats `1..=max_repeat` times.
pub fn sorted_repeated_keys<R: Rng + ?Sized>(rng: &mut R, n: usize, max_repeat: usize) -> Vec<u64> {
    debug_assert!(max_repeat >= 1);
    let mut keys = Vec::with_capacity(n);
    let mut value = 0_u64;
    while keys.len() < n {
        let repeat = rng.random_range(1..=max_repeat).min(n - keys.len());
        keys.extend(std::iter::repeat_n(value, repeat));
        value += rng.random_range(1..=3);
    }
    keys
}
