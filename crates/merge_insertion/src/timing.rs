use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::ford_johnson::merge_insertion_sort_by;
use crate::sequence::WorkingSequence;
use crate::{ALL_STRATEGIES, ContainerStrategy, Value, strategy_name};

/// Outcome of one timed sort with a single container strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct SortReport {
    pub strategy: ContainerStrategy,
    pub input_len: usize,
    pub sorted: Vec<Value>,
    pub elapsed: Duration,
    pub comparisons: usize,
}

impl SortReport {
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

/// Copies `input` into a fresh sequence of `strategy` and sorts it. The copy
/// is made before the clock starts.
pub fn run_timed(strategy: ContainerStrategy, input: &[Value]) -> SortReport {
    let (sorted, elapsed, comparisons) = match strategy {
        ContainerStrategy::Vec => timed::<Vec<Value>>(input),
        ContainerStrategy::VecDeque => timed::<VecDeque<Value>>(input),
    };

    debug!(
        strategy = strategy_name(strategy),
        len = input.len(),
        comparisons,
        elapsed_us = elapsed.as_secs_f64() * 1_000_000.0,
        "merge-insertion sort finished"
    );

    SortReport {
        strategy,
        input_len: input.len(),
        sorted,
        elapsed,
        comparisons,
    }
}

/// Runs every strategy in [`ALL_STRATEGIES`] order, each on its own copy.
pub fn run_all(input: &[Value]) -> Vec<SortReport> {
    ALL_STRATEGIES
        .iter()
        .map(|&strategy| run_timed(strategy, input))
        .collect()
}

fn timed<S: WorkingSequence>(input: &[Value]) -> (Vec<Value>, Duration, usize) {
    let mut comparisons = 0usize;
    let mut less = |a: Value, b: Value| {
        comparisons += 1;
        a < b
    };

    let working = S::from_slice(input);
    let start = Instant::now();
    let sorted = merge_insertion_sort_by(&working, &mut less);
    let elapsed = start.elapsed();

    (sorted.to_vec(), elapsed, comparisons)
}
