mod estimate;
mod ford_johnson;
mod input;
mod jacobsthal;
mod pairing;
mod sequence;
mod timing;

use std::collections::VecDeque;

pub use estimate::{ceil_log2, information_lower_bound, worst_case_comparisons};
pub use ford_johnson::{merge_insertion_sort, merge_insertion_sort_by};
pub use input::{InputError, parse_value, parse_values};
pub use jacobsthal::{jacobsthal, jacobsthal_sequence};
pub use pairing::split_pairs;
pub use sequence::WorkingSequence;
pub use timing::{SortReport, run_all, run_timed};

/// Element type accepted by the sorter: the platform's native signed int,
/// restricted to non-negative values at the input boundary.
pub type Value = i32;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ContainerStrategy {
    /// Contiguous buffer: O(1) random access, O(n) mid-sequence insertion.
    Vec,
    /// Ring buffer: cheap insertion at either end.
    VecDeque,
}

pub const ALL_STRATEGIES: [ContainerStrategy; 2] =
    [ContainerStrategy::Vec, ContainerStrategy::VecDeque];

pub fn all_strategies() -> &'static [ContainerStrategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: ContainerStrategy) -> &'static str {
    match strategy {
        ContainerStrategy::Vec => "std::vec::Vec",
        ContainerStrategy::VecDeque => "std::collections::VecDeque",
    }
}

pub fn sort_values(strategy: ContainerStrategy, data: &[Value]) -> Vec<Value> {
    match strategy {
        ContainerStrategy::Vec => merge_insertion_sort::<Vec<Value>>(data),
        ContainerStrategy::VecDeque => merge_insertion_sort::<VecDeque<Value>>(data).into(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[Value]) {
        for &strategy in all_strategies() {
            let actual = sort_values(strategy, data);

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "strategy={} input_len={}",
                strategy_name(strategy),
                data.len(),
            );
        }
    }

    fn count_comparisons(data: &[Value]) -> (Vec<Value>, usize) {
        let mut count = 0usize;
        let sorted = merge_insertion_sort_by(&data.to_vec(), &mut |a, b| {
            count += 1;
            a < b
        });
        (sorted, count)
    }

    fn permute(items: &mut [Value], k: usize, f: &mut impl FnMut(&[Value])) {
        if k <= 1 {
            f(items);
            return;
        }
        permute(items, k - 1, f);
        for i in 0..k - 1 {
            items.swap(if k % 2 == 0 { i } else { 0 }, k - 1);
            permute(items, k - 1, f);
        }
    }

    #[test]
    fn strategy_names_are_unique() {
        let mut seen = HashSet::new();
        for &strategy in all_strategies() {
            assert!(seen.insert(strategy_name(strategy)));
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![0, 1, Value::MAX, 0, Value::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 15, 16, 31, 32, 63, 64, 127, 128, 511, 2048] {
            let data: Vec<Value> = (0..size).map(|_| rng.random_range(0..=Value::MAX)).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let data: Vec<Value> = (0..size).map(|_| rng.random_range(0..16) * 17).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn sorting_sorted_input_is_identity() {
        let data: Vec<Value> = (0..500).map(|v| v / 3).collect();
        for &strategy in all_strategies() {
            assert_eq!(sort_values(strategy, &data), data);
        }
    }

    #[test]
    fn permutations_share_one_output() {
        let mut rng = StdRng::seed_from_u64(0xBA5E_0001);
        let mut data: Vec<Value> = (0..257).map(|_| rng.random_range(0..100)).collect();
        let reference = sort_values(ContainerStrategy::Vec, &data);
        for _ in 0..16 {
            data.shuffle(&mut rng);
            for &strategy in all_strategies() {
                assert_eq!(sort_values(strategy, &data), reference);
            }
        }
    }

    #[test]
    fn exhaustive_small_permutations() {
        for n in 0..=8 {
            let mut worst = 0usize;
            let mut items: Vec<Value> = (0..n as Value).collect();
            permute(&mut items, n, &mut |perm| {
                let (sorted, count) = count_comparisons(perm);
                assert!(sorted.windows(2).all(|w| w[0] < w[1]), "perm={perm:?}");
                assert_eq!(sorted.len(), n);
                worst = worst.max(count);
            });
            assert_eq!(worst, worst_case_comparisons(n), "n={n}");
            assert!(worst >= information_lower_bound(n), "n={n}");
        }
    }

    #[test]
    fn comparisons_stay_near_information_bound() {
        let mut rng = StdRng::seed_from_u64(0xC0DE_2026);
        for &size in &[10_usize, 100, 1000, 3000] {
            let data: Vec<Value> = (0..size).map(|_| rng.random_range(0..1_000_000)).collect();
            let (_, count) = count_comparisons(&data);
            assert!(count <= worst_case_comparisons(size), "size={size} count={count}");
            if size >= 1000 {
                // Every insertion searches the whole chain, which costs
                // roughly a tenth over the optimum at this scale.
                let bound = information_lower_bound(size);
                assert!(count * 100 <= bound * 120, "size={size} count={count} bound={bound}");
            }
        }
    }
}
