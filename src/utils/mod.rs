/*!
# Utilities

Provides the small abstractions the algorithm suite is parameterized over:
- [`Set`]: a minimal set interface with dense (bitset) and sparse (hash set)
  implementations, used for traversal bookkeeping,
- [`FromCapacity`]: capacity-aware construction for those set types.

Apart from `Set` and `FromCapacity`, you probably do not need to interact
with this module directly.
*/

use std::{collections::HashSet, hash::RandomState};

use fxhash::{FxBuildHasher, FxHashSet};
use stream_bitset::{bitset::BitSetImpl, PrimIndex};

pub mod set;

pub use set::Set;

/// Helper trait for datastructures that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for
    /// example) and the actual capacity that will be used (space-wise).
    ///
    /// If you only have one value as an upper bound, provide it as both
    /// arguments if possible.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<I> FromCapacity for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `BitSetImpl<I>` as a Set requires intializing to the maximum element
        Self::new(I::from_usize(total).unwrap())
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `HashSet<T>` as a Set only requires intializing to the number of elements
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `FxHashSet<T>` as a Set only requires intializing to the number of elements
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}
