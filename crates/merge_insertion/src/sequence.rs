use std::collections::VecDeque;

use crate::Value;

/// Ordered, mutable list of values used as "big" and "small" during a sort.
///
/// - `get` is positional random access.
/// - `insert` shifts every element at or after `index` one slot right.
/// - `remove` shifts every element after `index` one slot left.
pub trait WorkingSequence: Sized {
    fn new() -> Self;

    fn with_capacity(_capacity: usize) -> Self {
        Self::new()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<Value>;
    fn insert(&mut self, index: usize, value: Value);
    fn remove(&mut self, index: usize) -> Option<Value>;

    fn push_back(&mut self, value: Value) {
        let index = self.len();
        self.insert(index, value);
    }

    fn pop_back(&mut self) -> Option<Value> {
        let last = self.len().checked_sub(1)?;
        self.remove(last)
    }

    fn from_slice(values: &[Value]) -> Self {
        let mut seq = Self::with_capacity(values.len());
        for &value in values {
            seq.push_back(value);
        }
        seq
    }

    fn to_vec(&self) -> Vec<Value> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }
}

impl WorkingSequence for Vec<Value> {
    fn new() -> Self {
        Vec::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Value> {
        self.as_slice().get(index).copied()
    }

    fn insert(&mut self, index: usize, value: Value) {
        Vec::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> Option<Value> {
        (index < Vec::len(self)).then(|| Vec::remove(self, index))
    }

    fn push_back(&mut self, value: Value) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<Value> {
        self.pop()
    }

    fn from_slice(values: &[Value]) -> Self {
        values.to_vec()
    }

    fn to_vec(&self) -> Vec<Value> {
        self.clone()
    }
}

impl WorkingSequence for VecDeque<Value> {
    fn new() -> Self {
        VecDeque::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Value> {
        VecDeque::get(self, index).copied()
    }

    fn insert(&mut self, index: usize, value: Value) {
        VecDeque::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> Option<Value> {
        VecDeque::remove(self, index)
    }

    fn push_back(&mut self, value: Value) {
        VecDeque::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<Value> {
        VecDeque::pop_back(self)
    }

    fn to_vec(&self) -> Vec<Value> {
        self.iter().copied().collect()
    }
}
