use thiserror::Error;

/// Errors raised while validating the input an interner is built over.
///
/// Violations detected once an interner is running (a stale entry index, a
/// store that stopped being tuple-aligned, a broken chain) are not
/// recoverable and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Tuples must hold at least one word.
    #[error("tuple width must be non-zero")]
    ZeroWidth,
    /// The backing store does not split evenly into tuples.
    #[error("backing store of {len} words is not a multiple of tuple width {width}")]
    RaggedStore { len: usize, width: usize },
    /// The input holds more entries than a `u32` handle can address.
    #[error("{count} entries exceed the handle space")]
    TooManyEntries { count: usize },
}
