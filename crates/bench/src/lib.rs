use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

#[derive(Clone, Copy, Debug)]
pub enum Distribution {
    RandomUniform,
    Ascending,
    Descending,
    FewDistinct,
}

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::FewDistinct => "few_distinct",
        }
    }
}

pub const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::Ascending,
    Distribution::Descending,
    Distribution::FewDistinct,
];

/// Non-negative `i32` inputs shaped by `dist`.
pub fn generate_dataset<R: Rng + ?Sized>(rng: &mut R, dist: Distribution, size: usize) -> Vec<i32> {
    let upper = i32::try_from(size).unwrap_or(i32::MAX);
    match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random_range(0..=i32::MAX)).collect(),
        Distribution::Ascending => (0..upper).collect(),
        Distribution::Descending => (0..upper).rev().collect(),
        Distribution::FewDistinct => {
            let mut data: Vec<i32> = (0..size).map(|i| (i % 8) as i32).collect();
            data.shuffle(rng);
            data
        }
    }
}
