//! A shuffle expressed as a mapping from old indexes to new indexes.

use serde::{Deserialize, Serialize};

use super::Lcg;

/// A collection of index pairs where the key is an item's index before a
/// shuffle and the value its index after. An abstraction over a shuffled
/// array of indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleIndexMap {
    old_to_new: Vec<usize>,
}

impl ShuffleIndexMap {
    /// The identity mapping: every index maps to itself.
    fn identity(size: usize) -> Self {
        Self {
            old_to_new: (0..size).collect(),
        }
    }

    /// A random mapping usable as a shuffle.
    pub fn random(size: usize, rng: &mut Lcg) -> Self {
        let mut map = Self::identity(size);
        rng.shuffle(&mut map.old_to_new);
        map
    }

    /// The number of indexes in the mapping.
    pub fn len(&self) -> usize {
        self.old_to_new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old_to_new.is_empty()
    }

    /// The new index corresponding to an old index.
    ///
    /// # Panics
    ///
    /// Panics if `old_index` is out of bounds, like slice indexing.
    pub fn index(&self, old_index: usize) -> usize {
        self.old_to_new[old_index]
    }

    /// The raw array of new positions, indexed by old position.
    pub fn as_slice(&self) -> &[usize] {
        &self.old_to_new
    }

    /// Rearranges a slice according to this mapping.
    ///
    /// # Panics
    ///
    /// Panics if the slice's length differs from the mapping's.
    pub fn apply_to<T: Clone>(&self, values: &mut [T]) {
        assert_eq!(
            values.len(),
            self.old_to_new.len(),
            "mapping and slice lengths differ"
        );

        let old_values = values.to_vec();
        for (&new_index, value) in self.old_to_new.iter().zip(old_values) {
            values[new_index] = value;
        }
    }

    /// Iterates over `(old_index, new_index)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.old_to_new.iter().copied().enumerate()
    }
}
