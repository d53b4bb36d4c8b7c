/// Returns the `n`-th Jacobsthal number, `J(0) = 0`, `J(1) = 1`,
/// `J(n) = J(n - 1) + 2 * J(n - 2)`.
pub fn jacobsthal(n: u32) -> u64 {
    let (mut prev, mut curr) = (0_u64, 1_u64);
    if n == 0 {
        return prev;
    }
    for _ in 1..n {
        let next = curr + 2 * prev;
        prev = curr;
        curr = next;
    }
    curr
}

/// Insertion schedule for one merge level: the distinct Jacobsthal terms
/// `1, 3, 5, 11, 21, ...` that are strictly less than `len`.
///
/// `len <= 1` yields an empty schedule.
pub fn jacobsthal_sequence(len: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let (mut prev, mut curr) = (1_usize, 1_usize);
    while curr < len {
        order.push(curr);
        let next = curr + 2 * prev;
        prev = curr;
        curr = next;
    }
    order
}
