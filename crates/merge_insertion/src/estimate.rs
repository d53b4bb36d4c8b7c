/// Largest `n` whose factorial fits in a `u128`.
const EXACT_FACTORIAL_LIMIT: usize = 34;

#[inline]
pub fn ceil_log2(value: usize) -> usize {
    if value <= 1 {
        0
    } else {
        (usize::BITS - (value - 1).leading_zeros()) as usize
    }
}

/// `⌈log2(n!)⌉`, the minimum worst-case number of comparisons any
/// comparison sort needs for `n` distinct values.
pub fn information_lower_bound(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    if n <= EXACT_FACTORIAL_LIMIT {
        let factorial: u128 = (2..=n as u128).product();
        return (u128::BITS - (factorial - 1).leading_zeros()) as usize;
    }
    let bits: f64 = (2..=n).map(|k| (k as f64).log2()).sum();
    bits.ceil() as usize
}

/// Upper bound on the comparisons made by this implementation for `n`
/// values: one per pair, the recursive bound for the pair winners, and a
/// full-length binary search for every insertion of the level.
pub fn worst_case_comparisons(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let num_pairs = n / 2;
    let mut total = num_pairs + worst_case_comparisons(num_pairs);
    for chain_len in num_pairs..n {
        total += ceil_log2(chain_len + 1);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_log2_values() {
        let cases = [(0, 0), (1, 0), (2, 1), (3, 2), (4, 2), (5, 3), (8, 3), (9, 4), (1024, 10)];
        for (value, expected) in cases {
            assert_eq!(ceil_log2(value), expected, "value={value}");
        }
    }

    #[test]
    fn lower_bound_known_values() {
        // OEIS A003070.
        let expected = [0, 0, 1, 3, 5, 7, 10, 13, 16, 19, 22, 26, 29, 33, 37, 41, 45];
        for (n, &bound) in expected.iter().enumerate() {
            assert_eq!(information_lower_bound(n), bound, "n={n}");
        }
    }

    #[test]
    fn lower_bound_is_continuous_across_exact_limit() {
        let below = information_lower_bound(EXACT_FACTORIAL_LIMIT);
        let above = information_lower_bound(EXACT_FACTORIAL_LIMIT + 1);
        assert!(above > below);
        assert!(above - below <= ceil_log2(EXACT_FACTORIAL_LIMIT + 1));
    }

    #[test]
    fn worst_case_small_values() {
        let expected = [0, 0, 2, 4, 8, 11, 15, 18, 24];
        for (n, &bound) in expected.iter().enumerate() {
            assert_eq!(worst_case_comparisons(n), bound, "n={n}");
        }
        assert_eq!(worst_case_comparisons(10), 33);
        assert_eq!(worst_case_comparisons(100), 670);
        assert_eq!(worst_case_comparisons(1000), 9971);
    }
}
