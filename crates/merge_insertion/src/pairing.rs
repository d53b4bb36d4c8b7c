use crate::Value;
use crate::sequence::WorkingSequence;

/// Splits `input` into adjacent pairs and separates each pair's winner into
/// `big` and its loser into `small`, both in pair order.
///
/// An odd trailing element is appended to `small` after all losers. Exactly
/// `input.len() / 2` calls to `less` are made.
pub fn split_pairs<S, F>(input: &S, less: &mut F) -> (S, S)
where
    S: WorkingSequence,
    F: FnMut(Value, Value) -> bool,
{
    let len = input.len();
    let num_pairs = len / 2;
    let mut big = S::with_capacity(num_pairs);
    let mut small = S::with_capacity(len - num_pairs);

    let mut values = (0..len).filter_map(|i| input.get(i));
    while let Some(a) = values.next() {
        let Some(b) = values.next() else {
            small.push_back(a);
            break;
        };
        if less(a, b) {
            small.push_back(a);
            big.push_back(b);
        } else {
            small.push_back(b);
            big.push_back(a);
        }
    }

    (big, small)
}
