//! A bidirectional map.

use std::collections::HashMap;
use std::hash::Hash;

/// Errors produced by [`BiMap::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BiMapError {
    #[error("left key is already present in the map")]
    DuplicateLeft,
    #[error("right key is already present in the map")]
    DuplicateRight,
}

/// A collection of bijective pairs: every left value maps to exactly one
/// right value and vice versa, with constant-time lookup in both
/// directions.
#[derive(Debug, Clone)]
pub struct BiMap<L, R> {
    forward: HashMap<L, R>,
    reverse: HashMap<R, L>,
}

impl<L, R> BiMap<L, R> {
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    /// The number of pairs in the map.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl<L, R> Default for BiMap<L, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R> BiMap<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Adds a pair to the map. Fails without modifying anything if either
    /// side is already present.
    pub fn insert(&mut self, left: L, right: R) -> Result<(), BiMapError> {
        if self.forward.contains_key(&left) {
            return Err(BiMapError::DuplicateLeft);
        }
        if self.reverse.contains_key(&right) {
            return Err(BiMapError::DuplicateRight);
        }
        self.forward.insert(left.clone(), right.clone());
        self.reverse.insert(right, left);
        Ok(())
    }

    /// The right value paired with a left key.
    pub fn get_by_left(&self, left: &L) -> Option<&R> {
        self.forward.get(left)
    }

    /// The left value paired with a right key.
    pub fn get_by_right(&self, right: &R) -> Option<&L> {
        self.reverse.get(right)
    }

    pub fn contains_left(&self, left: &L) -> bool {
        self.forward.contains_key(left)
    }

    pub fn contains_right(&self, right: &R) -> bool {
        self.reverse.contains_key(right)
    }

    /// Removes the pair with this left key and returns its right value.
    /// Both directions stay consistent.
    pub fn remove_by_left(&mut self, left: &L) -> Option<R> {
        let right = self.forward.remove(left)?;
        self.reverse.remove(&right);
        Some(right)
    }

    /// Removes the pair with this right key and returns its left value.
    pub fn remove_by_right(&mut self, right: &R) -> Option<L> {
        let left = self.reverse.remove(right)?;
        self.forward.remove(&left);
        Some(left)
    }

    /// Iterates over the pairs in the forward direction, in arbitrary
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &R)> {
        self.forward.iter()
    }
}
