//! Interning of fixed-width tuples held in an external backing store.
//!
//! The store is split into consecutive tuples of `width` words; tuple `i`
//! starts at word `i * width`. The interner keeps one [`ChainRecord`] per
//! unique tuple and never writes to the store.

use crate::bucket::{BucketTable, Slot, EMPTY};
use crate::config::InternerConfig;
use crate::error::HashError;
use crate::handle::Handle;
use crate::hash::hash_bytes;
use crate::store::BackingStore;

// ============================================================================
// ChainRecord
// ============================================================================

/// One unique tuple: where it lives in the store and the next record in
/// its bucket chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChainRecord {
    entry: u32,
    next: u32,
}

// ============================================================================
// TupleInterner
// ============================================================================

#[derive(Debug, Clone)]
pub struct TupleInterner<S: BackingStore = Vec<i32>> {
    store: S,
    width: usize,
    table: BucketTable,
    records: Vec<ChainRecord>,
}

impl<S: BackingStore> TupleInterner<S> {
    /// Build an interner over `store`, whose length must be a multiple of
    /// `width` now and after every later append.
    pub fn new(store: S, width: usize, expected_entries: usize) -> Result<Self, HashError> {
        if width == 0 {
            return Err(HashError::ZeroWidth);
        }
        let len = store.word_count();
        if len % width != 0 {
            return Err(HashError::RaggedStore { len, width });
        }
        if len / width >= EMPTY as usize {
            return Err(HashError::TooManyEntries { count: len / width });
        }
        let table = BucketTable::with_hint(expected_entries);
        tracing::trace!(width, buckets = table.len(), "tuple interner created");
        Ok(Self {
            store,
            width,
            table,
            records: Vec::with_capacity(expected_entries),
        })
    }

    pub fn with_config(store: S, width: usize, config: &InternerConfig) -> Result<Self, HashError> {
        Self::new(store, width, config.expected_entries)
    }

    /// Intern the tuple at store index `entry`.
    ///
    /// Returns the handle of the first tuple equal to it, or a fresh handle
    /// if none was seen before.
    ///
    /// # Panics
    ///
    /// If `entry` does not address a whole tuple, or the store is no longer
    /// a multiple of the tuple width.
    pub fn add(&mut self, entry: u32) -> Handle {
        let words = self.store.word_count();
        assert!(
            words % self.width == 0,
            "backing store of {} words is not a multiple of tuple width {}",
            words,
            self.width
        );
        assert!(
            (entry as usize) < words / self.width,
            "entry {} is past the end of the backing store",
            entry
        );

        if self.table.needs_growth(self.records.len()) {
            self.grow();
        }

        let slot = match self.locate(self.tuple(entry)) {
            Ok(handle) => return handle,
            Err(slot) => slot,
        };

        assert!(self.records.len() < EMPTY as usize, "tuple handle space exhausted");
        let handle = self.records.len() as u32;
        self.records.push(ChainRecord { entry, next: EMPTY });
        match slot {
            Slot::Head(bucket) => self.table.set_head(bucket, handle),
            Slot::Next(prev) => self.records[prev as usize].next = handle,
        }
        Handle(handle)
    }

    /// Handle of a tuple equal to `tuple`, without interning it.
    pub fn lookup(&self, tuple: &[i32]) -> Option<Handle> {
        if tuple.len() != self.width {
            return None;
        }
        self.locate(tuple).ok()
    }

    /// The tuple interned under `handle`.
    pub fn get(&self, handle: Handle) -> &[i32] {
        self.tuple(self.records[handle.index()].entry)
    }

    /// Store index of the tuple that first introduced `handle`.
    pub fn entry_of(&self, handle: Handle) -> u32 {
        self.records[handle.index()].entry
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, &[i32])> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(move |(i, rec)| (Handle(i as u32), self.tuple(rec.entry)))
    }

    /// Number of unique tuples.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drop the table and records, handing the backing store back.
    pub fn into_store(self) -> S {
        self.store
    }

    #[inline]
    fn tuple(&self, entry: u32) -> &[i32] {
        let start = entry as usize * self.width;
        &self.store.words()[start..start + self.width]
    }

    /// Walk the chain for `tuple`: the matching handle, or the tail slot a
    /// new record should be linked into.
    fn locate(&self, tuple: &[i32]) -> Result<Handle, Slot> {
        let bucket = hash_bytes(tuple, self.table.len());
        let mut slot = Slot::Head(bucket);
        let mut cur = self.table.head(bucket);
        while cur != EMPTY {
            let rec = self.records[cur as usize];
            if self.tuple(rec.entry) == tuple {
                return Ok(Handle(cur));
            }
            slot = Slot::Next(cur);
            cur = rec.next;
        }
        Err(slot)
    }

    fn grow(&mut self) {
        let old = self.table.len();
        self.table.regrow();
        let buckets = self.table.len();
        for i in 0..self.records.len() {
            let bucket = hash_bytes(self.tuple(self.records[i].entry), buckets);
            self.records[i].next = self.table.head(bucket);
            self.table.set_head(bucket, i as u32);
        }
        tracing::debug!(records = self.records.len(), old, buckets, "tuple table grown");
    }
}

impl TupleInterner<Vec<i32>> {
    /// Interner that owns an initially empty store.
    pub fn with_width(width: usize, expected_entries: usize) -> Result<Self, HashError> {
        Self::new(Vec::new(), width, expected_entries)
    }

    /// Append `tuple` to the owned store and intern it.
    ///
    /// The words are appended even when the tuple is a duplicate, so the
    /// store stays a log of every tuple seen.
    pub fn push(&mut self, tuple: &[i32]) -> Handle {
        assert_eq!(tuple.len(), self.width, "tuple width mismatch");
        let entry = self.store.len() / self.width;
        assert!(entry < EMPTY as usize, "backing store exhausted the entry space");
        self.store.extend_from_slice(tuple);
        self.add(entry as u32)
    }
}
