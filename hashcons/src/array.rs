//! One-shot deduplication of whole arrays of tuples.

use crate::error::HashError;
use crate::handle::Handle;
use crate::tuple::TupleInterner;

/// For each consecutive `width`-word tuple of `data`, the handle of the
/// first tuple equal to it.
///
/// The result has one entry per tuple; its distinct values are exactly
/// `0..k` for `k` unique tuples.
pub fn hash_array(data: &[i32], width: usize) -> Result<Vec<Handle>, HashError> {
    if width == 0 {
        return Err(HashError::ZeroWidth);
    }
    let entries = data.len() / width;
    let mut interner = TupleInterner::new(data, width, entries)?;
    Ok((0..entries as u32).map(|i| interner.add(i)).collect())
}

/// [`hash_array`] over 64-bit words, `width` words per tuple.
///
/// Each word is split into its low and high 32-bit halves, in that order,
/// so tuples hash over the same bytes a little-endian word array holds.
pub fn hash_word_array(data: &[u64], width: usize) -> Result<Vec<Handle>, HashError> {
    if width == 0 {
        return Err(HashError::ZeroWidth);
    }
    if data.len() % width != 0 {
        return Err(HashError::RaggedStore {
            len: data.len(),
            width,
        });
    }
    let halves: Vec<i32> = data
        .iter()
        .flat_map(|&w| [w as u32 as i32, (w >> 32) as u32 as i32])
        .collect();
    hash_array(&halves, 2 * width)
}
