//! Read access to the words an interner hashes over.

/// Append-only word storage owned by the embedding application.
///
/// Interners only ever read through this view; words already written are
/// assumed never to change.
pub trait BackingStore {
    fn words(&self) -> &[i32];

    #[inline]
    fn word_count(&self) -> usize {
        self.words().len()
    }
}

impl BackingStore for Vec<i32> {
    #[inline]
    fn words(&self) -> &[i32] {
        self
    }
}

impl BackingStore for Box<[i32]> {
    #[inline]
    fn words(&self) -> &[i32] {
        self
    }
}

impl BackingStore for &[i32] {
    #[inline]
    fn words(&self) -> &[i32] {
        self
    }
}

impl BackingStore for &Vec<i32> {
    #[inline]
    fn words(&self) -> &[i32] {
        self
    }
}
