//! Bucket array of chain heads shared by both interners.

use crate::primes::next_prime;

/// Chain terminator and empty-bucket marker.
///
/// Bit-identical to the `-1` word that ends a chain stored inline.
pub const EMPTY: u32 = u32::MAX;

/// Where a chain walk stopped: the place a new record gets linked into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The head of bucket `.0`.
    Head(usize),
    /// The `next` link of record `.0`.
    Next(u32),
}

/// Prime-sized array of chain heads, each `EMPTY` or a record index.
#[derive(Debug, Clone)]
pub struct BucketTable {
    heads: Vec<u32>,
}

impl BucketTable {
    /// Table of `next_prime(expected_entries)` empty buckets.
    pub fn with_hint(expected_entries: usize) -> Self {
        Self {
            heads: vec![EMPTY; next_prime(expected_entries)],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    #[inline]
    pub fn head(&self, bucket: usize) -> u32 {
        self.heads[bucket]
    }

    #[inline]
    pub fn set_head(&mut self, bucket: usize, record: u32) {
        self.heads[bucket] = record;
    }

    /// Whether `records` entries overload the table.
    #[inline]
    pub fn needs_growth(&self, records: usize) -> bool {
        records > self.heads.len()
    }

    /// Resize to `next_prime(2 * len)` and reset every bucket to `EMPTY`.
    ///
    /// The caller must relink all of its records afterwards.
    pub fn regrow(&mut self) {
        let size = next_prime(2 * self.heads.len());
        self.heads.clear();
        self.heads.resize(size, EMPTY);
    }

    /// Number of non-empty buckets.
    pub fn occupied(&self) -> usize {
        self.heads.iter().filter(|&&h| h != EMPTY).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_prime_sized_and_empty() {
        let t = BucketTable::with_hint(10);
        assert_eq!(t.len(), 11);
        assert_eq!(t.occupied(), 0);
        assert!((0..t.len()).all(|b| t.head(b) == EMPTY));
    }

    #[test]
    fn test_zero_hint_still_has_a_bucket() {
        let t = BucketTable::with_hint(0);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_regrow_doubles_and_clears() {
        let mut t = BucketTable::with_hint(5);
        t.set_head(2, 7);
        assert_eq!(t.occupied(), 1);
        t.regrow();
        assert_eq!(t.len(), 11);
        assert_eq!(t.occupied(), 0);
    }

    #[test]
    fn test_growth_threshold_is_strict() {
        let t = BucketTable::with_hint(5);
        assert!(!t.needs_growth(5));
        assert!(t.needs_growth(6));
    }

    #[test]
    fn test_empty_matches_inline_terminator() {
        assert_eq!(-1i32 as u32, EMPTY);
    }
}
