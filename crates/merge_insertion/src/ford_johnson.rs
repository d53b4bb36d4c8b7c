use tracing::trace;

use crate::Value;
use crate::jacobsthal::jacobsthal_sequence;
use crate::pairing::split_pairs;
use crate::sequence::WorkingSequence;

/// Sorts `input` ascending with merge-insertion, using `<` on values.
pub fn merge_insertion_sort<S: WorkingSequence>(input: &[Value]) -> S {
    merge_insertion_sort_by(&S::from_slice(input), &mut |a, b| a < b)
}

/// Sorts `input` into a new sequence with merge-insertion. `less(a, b)` must
/// be a strict ordering; every comparison the algorithm makes goes through it.
pub fn merge_insertion_sort_by<S, F>(input: &S, less: &mut F) -> S
where
    S: WorkingSequence,
    F: FnMut(Value, Value) -> bool,
{
    let (big, small) = split_pairs(input, less);
    sort_level(big, small, less, 0)
}

/// Recursively sorts `big`, then merges `small` into it.
fn sort_level<S, F>(mut big: S, mut small: S, less: &mut F, depth: usize) -> S
where
    S: WorkingSequence,
    F: FnMut(Value, Value) -> bool,
{
    trace!(depth, big = big.len(), small = small.len(), "merge level");

    if big.len() > 1 {
        let (next_big, next_small) = split_pairs(&big, less);
        big = sort_level(next_big, next_small, less, depth + 1);
    }

    insert_jacobsthal_order(&mut big, &mut small, less);
    while let Some(value) = small.pop_back() {
        binary_insert(&mut big, value, less);
    }

    big
}

/// Moves the elements of `small` found at Jacobsthal positions into the
/// sorted `big`.
///
/// The schedule is computed once from the initial `small.len()`. Removal
/// shifts later elements left, so each position is checked against the
/// current length and skipped once it falls out of range.
fn insert_jacobsthal_order<S, F>(big: &mut S, small: &mut S, less: &mut F)
where
    S: WorkingSequence,
    F: FnMut(Value, Value) -> bool,
{
    for index in jacobsthal_sequence(small.len()) {
        if let Some(value) = small.remove(index) {
            binary_insert(big, value, less);
        }
    }
}

/// Inserts `value` before the first element of `sorted` that is not less
/// than it.
fn binary_insert<S, F>(sorted: &mut S, value: Value, less: &mut F)
where
    S: WorkingSequence,
    F: FnMut(Value, Value) -> bool,
{
    let pos = lower_bound(sorted, value, less);
    sorted.insert(pos, value);
}

fn lower_bound<S, F>(sorted: &S, value: Value, less: &mut F) -> usize
where
    S: WorkingSequence,
    F: FnMut(Value, Value) -> bool,
{
    let (mut lo, mut hi) = (0, sorted.len());
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        match sorted.get(mid) {
            Some(probe) if less(probe, value) => lo = mid + 1,
            _ => hi = mid,
        }
    }
    lo
}
