//! Grab-bag utility library: arithmetic and radix math, angle helpers,
//! color blending, easing curves, randomness, and small collection types.
//!
//! Every module is a set of pure or near-pure functions; nothing here holds
//! global state or spawns anything.

pub mod collections;
pub mod colors;
pub mod easing;
pub mod maths;
pub mod randomness;

pub use collections::{BiMap, BiMapError, Lazy, Pair};
pub use colors::Rgba;
pub use maths::radix::{AscendingCounter, RadixError};
pub use randomness::{Lcg, ShuffleIndexMap};
