//! General-purpose arithmetic helpers that the standard library does not
//! cover directly: linear interpolation, true (positive) modulo, range
//! wrapping, tab stops, and prime factorization.

/// Linearly interpolates between two points. The result is not clamped:
/// amounts outside `0..=1` extrapolate.
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    amount * (end - start) + start
}

/// [`lerp`] for `f32`.
pub fn lerp_f32(start: f32, end: f32, amount: f32) -> f32 {
    amount * (end - start) + start
}

/// Integer interpolation; rounds to the nearest integer.
pub fn lerp_round(start: i64, end: i64, amount: f64) -> i64 {
    lerp(start as f64, end as f64, amount).round() as i64
}

/// The operation inverse to [`lerp`]: if `r = lerp(a, b, x)` then
/// `x = inverse_lerp(a, b, r)`.
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    (value - start) / (end - start)
}

/// [`inverse_lerp`] for `f32`.
pub fn inverse_lerp_f32(start: f32, end: f32, value: f32) -> f32 {
    (value - start) / (end - start)
}

/// For a 0-based column position of a tab character, returns the column
/// position of the next character.
///
/// # Panics
///
/// Panics if `tab_size` is not positive.
pub fn tab_shift(tab_column: i64, tab_size: i64) -> i64 {
    assert!(tab_size > 0, "tab size must be positive");
    ((tab_column / tab_size) + 1) * tab_size
}

/// Returns the positive `value mod modulo`.
///
/// `%` is the remainder operation and keeps the sign of the dividend; this
/// is the modulo operation, whose result is always in `[0, modulo)`:
/// `-1 % 6 == -1` but `pos_mod(-1, 6) == 5`.
///
/// # Panics
///
/// Panics if `modulo` is zero (undefined) or negative (unsupported), like
/// `%` itself panics on a zero divisor.
pub fn pos_mod(value: i64, modulo: i64) -> i64 {
    assert!(modulo != 0, "x mod 0 is undefined");
    assert!(modulo > 0, "negative modulo is not supported");

    let remainder = value % modulo;
    if remainder < 0 {
        remainder + modulo
    } else {
        remainder
    }
}

/// [`pos_mod`] for `f64`.
///
/// # Panics
///
/// Panics if `modulo` is zero or negative.
pub fn pos_mod_f64(value: f64, modulo: f64) -> f64 {
    assert!(modulo != 0.0, "x mod 0 is undefined");
    assert!(modulo > 0.0, "negative modulo is not supported");

    let remainder = value % modulo;
    if remainder < 0.0 {
        remainder + modulo
    } else {
        remainder
    }
}

/// [`pos_mod`] for `f32`.
///
/// # Panics
///
/// Panics if `modulo` is zero or negative.
pub fn pos_mod_f32(value: f32, modulo: f32) -> f32 {
    assert!(modulo != 0.0, "x mod 0 is undefined");
    assert!(modulo > 0.0, "negative modulo is not supported");

    let remainder = value % modulo;
    if remainder < 0.0 {
        remainder + modulo
    } else {
        remainder
    }
}

/// Wraps a value into the range `[min, max)`: values below the range come
/// back in from the end, values above come back in from the start.
///
/// A generalized [`pos_mod`]: `wrap(x, 0, y) == pos_mod(x, y)`. Swapped
/// bounds are swapped back; an empty range (`min == max`) returns `min`.
pub fn wrap(value: i64, min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    pos_mod(value - min, max - min) + min
}

/// [`wrap`] for `f64`.
pub fn wrap_f64(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        return min;
    }
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    pos_mod_f64(value - min, max - min) + min
}

/// [`wrap`] for `f32`.
pub fn wrap_f32(value: f32, min: f32, max: f32) -> f32 {
    if min == max {
        return min;
    }
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    pos_mod_f32(value - min, max - min) + min
}

/// Returns the prime factors of a number in ascending order, lazily.
///
/// `0`, `1` and `-1` each yield themselves once. A negative number yields
/// `-1` followed by the factors of its absolute value.
pub fn factors(n: i64) -> Factors {
    Factors {
        remaining: n,
        factor: 2,
        trivial: (-1..=1).contains(&n),
        pending_sign: n < -1,
        done: false,
    }
}

/// Iterator returned by [`factors`].
#[derive(Debug, Clone)]
pub struct Factors {
    remaining: i64,
    factor: i64,
    trivial: bool,
    pending_sign: bool,
    done: bool,
}

impl Iterator for Factors {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }

        if self.trivial {
            self.done = true;
            return Some(self.remaining);
        }

        if self.pending_sign {
            self.pending_sign = false;
            self.remaining = -self.remaining;
            return Some(-1);
        }

        while self.factor <= self.remaining {
            if self.remaining % self.factor == 0 {
                self.remaining /= self.factor;
                return Some(self.factor);
            }
            self.factor += 1;
        }

        self.done = true;
        None
    }
}
