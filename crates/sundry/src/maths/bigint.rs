//! `BigInt` ports of the arithmetic helpers in [`super::more`]. The
//! radix and digital-root operations for `BigInt` live in
//! [`super::radix`].

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

/// Square root of a `BigInt` as an `f64`.
///
/// Goes through `f64`, so precision and magnitude are limited by the
/// float: values beyond `f64` range come back as infinity.
pub fn sqrt(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(f64::NAN).sqrt()
}

/// Linearly interpolates between two `BigInt` points, rounding the offset.
///
/// The offset is computed in `f64`, so precision loss sets in once the
/// distance between the points exceeds `f64`'s exact integer range.
///
/// # Panics
///
/// Panics if `amount` is not finite.
pub fn lerp(start: &BigInt, end: &BigInt, amount: f64) -> BigInt {
    let difference = (end - start).to_f64().unwrap_or(f64::NAN);
    let offset = BigInt::from_f64((amount * difference).round())
        .expect("finite interpolation offset");
    offset + start
}

/// Returns the positive `value mod modulo`. See
/// [`pos_mod`](super::more::pos_mod).
///
/// # Panics
///
/// Panics if `modulo` is zero or negative.
pub fn pos_mod(value: &BigInt, modulo: &BigInt) -> BigInt {
    assert!(!modulo.is_zero(), "x mod 0 is undefined");
    assert!(modulo.is_positive(), "negative modulo is not supported");

    let remainder = value % modulo;
    if remainder.is_negative() {
        remainder + modulo
    } else {
        remainder
    }
}

/// Wraps a value into the range `[min, max)`. See
/// [`wrap`](super::more::wrap).
pub fn wrap(value: &BigInt, min: &BigInt, max: &BigInt) -> BigInt {
    if min == max {
        return min.clone();
    }
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    pos_mod(&(value - min), &(max - min)) + min
}

/// Returns the prime factors of a number in ascending order, lazily. See
/// [`factors`](super::more::factors).
pub fn factors(n: BigInt) -> BigFactors {
    let trivial = n >= BigInt::from(-1) && n <= BigInt::from(1);
    let pending_sign = n < BigInt::from(-1);
    BigFactors {
        remaining: n,
        factor: BigInt::from(2),
        trivial,
        pending_sign,
        done: false,
    }
}

/// Iterator returned by [`factors`].
#[derive(Debug, Clone)]
pub struct BigFactors {
    remaining: BigInt,
    factor: BigInt,
    trivial: bool,
    pending_sign: bool,
    done: bool,
}

impl Iterator for BigFactors {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        if self.done {
            return None;
        }

        if self.trivial {
            self.done = true;
            return Some(self.remaining.clone());
        }

        if self.pending_sign {
            self.pending_sign = false;
            self.remaining = -&self.remaining;
            return Some(BigInt::from(-1));
        }

        while self.factor <= self.remaining {
            if (&self.remaining % &self.factor).is_zero() {
                self.remaining /= &self.factor;
                return Some(self.factor.clone());
            }
            self.factor += BigInt::from(1);
        }

        self.done = true;
        None
    }
}
