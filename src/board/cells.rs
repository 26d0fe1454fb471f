use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over flat row-major cell indices
///
/// Tracks cell membership, typically the empty cells of a grid. Provides
/// O(1) insertion and rank-based selection, which is what uniform sampling
/// over the present cells needs.
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
    capacity: usize,
}

impl CellSet {
    /// Create a set with no cells present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Insert a flat cell index
    ///
    /// Indices at or beyond the capacity are ignored.
    pub fn insert(&mut self, index: usize) {
        if index < self.capacity {
            self.bits.set(index, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Select the n-th present cell in ascending index order
    ///
    /// Returns `None` when fewer than `n + 1` cells are present.
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// Extract all present indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellSet({} cells: {:?})", self.count(), self.to_vec())
    }
}
