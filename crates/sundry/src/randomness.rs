//! A small deterministic random generator and the sampling helpers built
//! on it: picking, order-preserving sampling without replacement, and
//! shuffling with an index remap.
//!
//! The generator is a 64-bit linear congruential generator, which is
//! plenty for shuffling and sampling and keeps the library free of a
//! dedicated randomness dependency. Seed it explicitly with
//! [`Lcg::with_seed`] for reproducible sequences.

mod shuffle_map;

pub use shuffle_map::ShuffleIndexMap;


const MULTIPLIER: u64 = 6364136223846793005;
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// A 64-bit linear congruential random generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// A generator seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 8];
        let seed = match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(_) => 0x1234_5678,
        };
        Self::with_seed(seed)
    }

    /// A generator with a fixed seed. The same seed always produces the
    /// same sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed ^ SEED_MIX,
        }
    }

    /// The next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(1);
        self.state
    }

    /// A uniform `f64` in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// A uniform integer between the two bounds, both inclusive. The
    /// bounds may be given in either order.
    pub fn range_i64(&mut self, a: i64, b: i64) -> i64 {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let span = (high.wrapping_sub(low) as u64).wrapping_add(1);
        if span == 0 {
            // The full i64 range; every draw is in bounds.
            return self.next_u64() as i64;
        }
        low.wrapping_add((self.next_u64() % span) as i64)
    }

    /// Returns `true` with the given probability (0 to 1, both
    /// inclusive).
    pub fn chance(&mut self, chance: f64) -> bool {
        self.next_f64() < chance
    }

    /// A uniformly random item of the slice, or `None` if it is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.next_u64() % items.len() as u64) as usize;
        Some(&items[index])
    }

    /// Picks `count` distinct items from the slice by selection sampling,
    /// keeping the order they had in the slice.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the number of items.
    pub fn pick_multiple_different<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        assert!(
            count <= items.len(),
            "cannot pick more items than the slice contains"
        );

        let mut result = Vec::with_capacity(count);
        if count == 0 {
            return result;
        }

        let mut left_to_pick = count;
        let mut items_left = items.len();
        for item in items {
            if self.chance(left_to_pick as f64 / items_left as f64) {
                result.push(item.clone());
                left_to_pick -= 1;
                if left_to_pick == 0 {
                    break;
                }
            }
            items_left -= 1;
        }

        result
    }

    /// Shuffles a slice in place with Durstenfeld's version of the
    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        for i in (1..values.len()).rev() {
            let j = (self.next_u64() % (i as u64 + 1)) as usize;
            values.swap(i, j);
        }
    }

    /// Shuffles a slice in place and returns the mapping from old indexes
    /// to new indexes, for tracking where the items ended up.
    pub fn shuffle_remap<T: Clone>(&mut self, values: &mut [T]) -> ShuffleIndexMap {
        let old_to_new = ShuffleIndexMap::random(values.len(), self);
        old_to_new.apply_to(values);
        old_to_new
    }
}
