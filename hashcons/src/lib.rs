//! Hash-consing interners over packed integer data.
//!
//! Two interners share one open-chaining table design:
//!
//! - [`TupleInterner`] deduplicates fixed-width tuples that live in a
//!   caller-supplied backing store.
//! - [`VectorInterner`] deduplicates variable-length vectors, packing each
//!   unique vector inline in its own word buffer.
//!
//! Every structurally distinct value gets a dense [`Handle`] in first-seen
//! order. Collisions are resolved by exact comparison, so the hash only
//! affects throughput.

pub mod array;
pub mod bucket;
pub mod config;
pub mod error;
pub mod handle;
pub mod hash;
pub mod primes;
pub mod store;
pub mod tuple;
pub mod vector;

pub use array::{hash_array, hash_word_array};
pub use config::InternerConfig;
pub use error::HashError;
pub use handle::Handle;
pub use store::BackingStore;
pub use tuple::TupleInterner;
pub use vector::VectorInterner;
