//! Interning of variable-length integer vectors packed into one buffer.
//!
//! Each unique vector is stored inline as a record
//!
//! ```text
//! [len, next, v0, v1, ..., v(len-1), pad?]
//! ```
//!
//! where `next` links the record into its bucket chain (`-1` ends the
//! chain) and one `-1` pad word is appended when `len` is odd, so every
//! record starts on an even word offset. `map[handle]` holds the offset of
//! the record for `handle`.

use crate::bucket::{BucketTable, Slot, EMPTY};
use crate::config::InternerConfig;
use crate::handle::Handle;
use crate::hash::hash_words;

const HEADER: usize = 2;
const PAD: i32 = -1;

#[derive(Debug, Clone)]
pub struct VectorInterner {
    table: BucketTable,
    data: Vec<i32>,
    map: Vec<u32>,
}

impl Default for VectorInterner {
    fn default() -> Self {
        Self::with_config(&InternerConfig::default())
    }
}

impl VectorInterner {
    pub fn new(expected_entries: usize) -> Self {
        let table = BucketTable::with_hint(expected_entries);
        tracing::trace!(buckets = table.len(), "vector interner created");
        Self {
            table,
            data: Vec::with_capacity(expected_entries * 4),
            map: Vec::with_capacity(expected_entries),
        }
    }

    pub fn with_config(config: &InternerConfig) -> Self {
        Self::new(config.expected_entries)
    }

    /// Intern `values`, returning the handle of the first equal vector seen
    /// or a fresh one.
    pub fn add(&mut self, values: &[i32]) -> Handle {
        if self.table.needs_growth(self.map.len()) {
            self.grow();
        }

        let slot = match self.locate(values) {
            Ok(handle) => return handle,
            Err(slot) => slot,
        };

        assert!(values.len() <= i32::MAX as usize, "vector too long to intern");
        assert!(self.map.len() < EMPTY as usize, "vector handle space exhausted");
        assert!(self.data.len() < EMPTY as usize, "vector data exceeds the addressable range");
        assert!(self.data.len() % 2 == 0, "vector record lost two-word alignment");

        let handle = self.map.len() as u32;
        self.map.push(self.data.len() as u32);
        self.data.push(values.len() as i32);
        self.data.push(EMPTY as i32);
        self.data.extend_from_slice(values);
        if values.len() & 1 == 1 {
            self.data.push(PAD);
        }

        match slot {
            Slot::Head(bucket) => self.table.set_head(bucket, handle),
            Slot::Next(prev) => self.set_next(prev, handle),
        }
        Handle(handle)
    }

    /// Handle of a vector equal to `values`, without interning it.
    pub fn lookup(&self, values: &[i32]) -> Option<Handle> {
        self.locate(values).ok()
    }

    /// Borrowed view of the vector interned under `handle`.
    #[inline]
    pub fn get(&self, handle: Handle) -> &[i32] {
        self.record(handle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, &[i32])> + '_ {
        (0..self.map.len() as u32).map(move |h| (Handle(h), self.record(h)))
    }

    /// Number of unique vectors.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }

    #[inline]
    fn offset(&self, handle: u32) -> usize {
        self.map[handle as usize] as usize
    }

    #[inline]
    fn record(&self, handle: u32) -> &[i32] {
        let off = self.offset(handle);
        let len = self.data[off] as usize;
        &self.data[off + HEADER..off + HEADER + len]
    }

    #[inline]
    fn next(&self, handle: u32) -> u32 {
        self.data[self.offset(handle) + 1] as u32
    }

    #[inline]
    fn set_next(&mut self, handle: u32, next: u32) {
        let off = self.offset(handle);
        self.data[off + 1] = next as i32;
    }

    fn locate(&self, values: &[i32]) -> Result<Handle, Slot> {
        let bucket = hash_words(values, self.table.len());
        let mut slot = Slot::Head(bucket);
        let mut cur = self.table.head(bucket);
        while cur != EMPTY {
            if self.record(cur) == values {
                return Ok(Handle(cur));
            }
            slot = Slot::Next(cur);
            cur = self.next(cur);
        }
        Err(slot)
    }

    fn grow(&mut self) {
        let old = self.table.len();
        self.table.regrow();
        let buckets = self.table.len();
        for h in 0..self.map.len() as u32 {
            let bucket = hash_words(self.record(h), buckets);
            let head = self.table.head(bucket);
            self.set_next(h, head);
            self.table.set_head(bucket, h);
        }
        tracing::debug!(records = self.map.len(), old, buckets, "vector table grown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural(n: i32) -> Vec<i32> {
        (0..n).collect()
    }

    #[test]
    fn test_natural_sequences_up_and_down() {
        let mut interner = VectorInterner::new(5);
        let up: Vec<usize> = (0..20).map(|i| interner.add(&natural(i)).index()).collect();
        assert_eq!(up, (0..20).collect::<Vec<_>>());

        let down: Vec<usize> = (1..=20)
            .rev()
            .map(|i| interner.add(&natural(i)).index())
            .collect();
        let mut expected = vec![20];
        expected.extend((1..20).rev());
        assert_eq!(down, expected);
        assert_eq!(interner.len(), 21);
    }

    #[test]
    fn test_empty_vector_interns_once() {
        let mut interner = VectorInterner::default();
        let a = interner.add(&[]);
        let b = interner.add(&[]);
        assert_eq!(a, b);
        assert_eq!(interner.get(a), &[] as &[i32]);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn test_records_are_padded_to_even_words() {
        let mut interner = VectorInterner::new(4);
        interner.add(&[9]);
        assert_eq!(interner.data, vec![1, -1, 9, -1]);
        interner.add(&[4, 5]);
        assert_eq!(interner.data.len(), 8);
        assert_eq!(interner.map, vec![0, 4]);
        assert!(interner.map.iter().all(|off| off % 2 == 0));
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let mut interner = VectorInterner::new(1);
        let a = interner.add(&[1, 2, 3]);
        let b = interner.add(&[1, 2]);
        let c = interner.add(&[1, 2, 3, 0]);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.get(b), &[1, 2]);
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let mut interner = VectorInterner::new(2);
        let h = interner.add(&[-5, 5]);
        assert_eq!(interner.lookup(&[-5, 5]), Some(h));
        assert_eq!(interner.lookup(&[5, -5]), None);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn test_growth_preserves_entries() {
        let mut interner = VectorInterner::new(0);
        let before = interner.bucket_count();
        let handles: Vec<Handle> = (0..64).map(|i| interner.add(&[i, i * i])).collect();
        assert!(interner.bucket_count() > before);
        for (i, h) in handles.iter().enumerate() {
            let i = i as i32;
            assert_eq!(interner.get(*h), &[i, i * i]);
            assert_eq!(interner.add(&[i, i * i]), *h);
        }
    }

    #[test]
    fn test_iter_in_handle_order() {
        let mut interner = VectorInterner::new(4);
        interner.add(&[3]);
        interner.add(&[]);
        interner.add(&[3]);
        let all: Vec<Vec<i32>> = interner.iter().map(|(_, v)| v.to_vec()).collect();
        assert_eq!(all, vec![vec![3], vec![]]);
    }
}
