use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense, zero-based identifier of an interned value.
///
/// Handles are issued in first-seen order and never change for the
/// lifetime of the interner that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Handle(pub(crate) u32);

impl Handle {
    /// Raw index into the interner's record space.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<Handle> for usize {
    fn from(h: Handle) -> usize {
        h.index()
    }
}

impl From<Handle> for u32 {
    fn from(h: Handle) -> u32 {
        h.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
