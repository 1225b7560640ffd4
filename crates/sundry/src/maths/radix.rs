//! Conversion of integers to and from digit arrays in an arbitrary base,
//! odometer-style counting over all fixed-width digit arrays, and digital
//! roots.
//!
//! Digit arrays are most-significant digit first and never empty: zero is
//! `[0]`. Every digit is strictly below the radix when produced by this
//! module; decoding does not enforce that on its inputs (see
//! [`from_digits`]).

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

/// Errors produced by the radix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RadixError {
    #[error("base must be at least 2")]
    RadixTooSmall,
    #[error("there must be at least one place in the counter")]
    NoPlaces,
    #[error("digital root of a negative value is undefined")]
    NegativeValue,
    #[error("decoded value does not fit in an i64")]
    Overflow,
}

/// Converts a value into digits in the given base, units place last.
///
/// The sign of `value` is discarded: a negative value encodes the same as
/// its absolute value. With `pad_to_places`, the result is left-padded with
/// zeros up to that length; a value with more natural digits than the pad
/// is returned in full, never truncated.
pub fn to_digits(
    value: i64,
    radix: u16,
    pad_to_places: Option<usize>,
) -> Result<Vec<u16>, RadixError> {
    if radix < 2 {
        return Err(RadixError::RadixTooSmall);
    }

    let radix = u64::from(radix);
    let mut remaining = value.unsigned_abs();

    // Units place first; reversed after padding.
    let mut digits = Vec::with_capacity(pad_to_places.unwrap_or(4));
    loop {
        digits.push((remaining % radix) as u16);
        remaining /= radix;
        if remaining == 0 {
            break;
        }
    }

    if let Some(places) = pad_to_places {
        while digits.len() < places {
            digits.push(0);
        }
    }

    digits.reverse();
    Ok(digits)
}

/// [`to_digits`] for arbitrary-precision values.
pub fn big_to_digits(
    value: &BigInt,
    radix: u16,
    pad_to_places: Option<usize>,
) -> Result<Vec<u16>, RadixError> {
    if radix < 2 {
        return Err(RadixError::RadixTooSmall);
    }

    let radix = BigUint::from(radix);
    let mut remaining = value.magnitude().clone();

    let mut digits = Vec::with_capacity(pad_to_places.unwrap_or(4));
    loop {
        let digit = (&remaining % &radix)
            .to_u16()
            .expect("remainder is below a u16 radix");
        digits.push(digit);
        remaining /= &radix;
        if remaining.is_zero() {
            break;
        }
    }

    if let Some(places) = pad_to_places {
        while digits.len() < places {
            digits.push(0);
        }
    }

    digits.reverse();
    Ok(digits)
}

/// Converts an array of digits in the given base, units place last, into a
/// value.
///
/// Digits are taken literally as `digit * radix^position` and are not
/// checked against the radix, so digits at or above the radix are accepted
/// and contribute their literal weight. Fails with
/// [`RadixError::Overflow`] only when the decoded value itself does not fit
/// in an `i64`; leading zeros never overflow no matter how many there are.
pub fn from_digits(digits: &[u16], radix: u16) -> Result<i64, RadixError> {
    if radix < 2 {
        return Err(RadixError::RadixTooSmall);
    }

    let radix = i64::from(radix);
    let mut result: i64 = 0;
    // The multiplier drops to None once radix^position leaves i64 range;
    // from there only zero digits are representable.
    let mut multiplier: Option<i64> = Some(1);

    for &digit in digits.iter().rev() {
        if digit != 0 {
            let place = multiplier.ok_or(RadixError::Overflow)?;
            let term = i64::from(digit)
                .checked_mul(place)
                .ok_or(RadixError::Overflow)?;
            result = result.checked_add(term).ok_or(RadixError::Overflow)?;
        }
        multiplier = multiplier.and_then(|m| m.checked_mul(radix));
    }

    Ok(result)
}

/// [`from_digits`] with an arbitrary-precision accumulator; never
/// overflows.
pub fn big_from_digits(digits: &[u16], radix: u16) -> Result<BigInt, RadixError> {
    if radix < 2 {
        return Err(RadixError::RadixTooSmall);
    }

    let radix = BigInt::from(radix);
    let mut result = BigInt::zero();
    let mut multiplier = BigInt::from(1);

    for &digit in digits.iter().rev() {
        result += BigInt::from(digit) * &multiplier;
        multiplier *= &radix;
    }

    Ok(result)
}

/// Enumerates all numbers of the given digit length in the given base, as
/// digit arrays with units place last, in ascending order.
///
/// Starts at all zeros and ends at all `radix - 1`; the digit at the end of
/// the array is incremented first. The sequence has exactly
/// `radix^places` elements. Each yielded array is an independent copy, and
/// a fresh call with the same arguments restarts the identical sequence.
pub fn count_all_ascending(radix: u16, places: usize) -> Result<AscendingCounter, RadixError> {
    if places < 1 {
        return Err(RadixError::NoPlaces);
    }
    if radix < 2 {
        return Err(RadixError::RadixTooSmall);
    }

    Ok(AscendingCounter {
        current: vec![0; places],
        radix,
        done: false,
    })
}

/// Iterator returned by [`count_all_ascending`].
#[derive(Debug, Clone)]
pub struct AscendingCounter {
    current: Vec<u16>,
    radix: u16,
    done: bool,
}

impl Iterator for AscendingCounter {
    type Item = Vec<u16>;

    fn next(&mut self) -> Option<Vec<u16>> {
        if self.done {
            return None;
        }

        let yielded = self.current.clone();

        // Add one, carrying from the units place toward the front. A carry
        // out of the front digit means the counter has rolled over; the
        // rolled-over state is discarded.
        let mut carry = true;
        for digit in self.current.iter_mut().rev() {
            if *digit == self.radix - 1 {
                *digit = 0;
                continue;
            }
            *digit += 1;
            carry = false;
            break;
        }
        if carry {
            self.done = true;
        }

        Some(yielded)
    }
}

/// Calculates the digital root of a number: the single digit obtained by
/// summing the number's digits in the given base, then the digits of that
/// sum, until one digit remains.
///
/// Uses the closed form `1 + (value - 1) mod (radix - 1)` rather than
/// actually re-summing.
pub fn digital_root(value: i64, radix: u16) -> Result<i64, RadixError> {
    if value < 0 {
        return Err(RadixError::NegativeValue);
    }
    if radix < 2 {
        return Err(RadixError::RadixTooSmall);
    }

    if value == 0 {
        return Ok(0);
    }
    Ok(1 + (value - 1) % (i64::from(radix) - 1))
}

/// [`digital_root`] for arbitrary-precision values.
pub fn big_digital_root(value: &BigInt, radix: u16) -> Result<BigInt, RadixError> {
    if value.sign() == num_bigint::Sign::Minus {
        return Err(RadixError::NegativeValue);
    }
    if radix < 2 {
        return Err(RadixError::RadixTooSmall);
    }

    if value.is_zero() {
        return Ok(BigInt::zero());
    }
    let one = BigInt::from(1);
    Ok(&one + (value - &one) % (BigInt::from(radix) - &one))
}
