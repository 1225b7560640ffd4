#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use sundry::maths::radix::{big_from_digits, big_to_digits, from_digits, to_digits, RadixError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    let radix = u16::from_le_bytes([data[0], data[1]]).max(2);
    let value = i64::from_le_bytes([
        data[2], data[3], data[4], data[5], data[6], data[7], data[8], data[9],
    ]);

    // Encoding and decoding back must land on the absolute value, in both
    // accumulator widths.
    let digits = to_digits(value, radix, None).expect("radix is at least 2");
    let expected = value.unsigned_abs();
    match from_digits(&digits, radix) {
        Ok(decoded) => assert_eq!(decoded as u64, expected),
        // abs(i64::MIN) is the one encodable value that cannot decode.
        Err(RadixError::Overflow) => assert_eq!(expected, 1 << 63),
        Err(other) => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        big_from_digits(&digits, radix).expect("radix is at least 2"),
        BigInt::from(expected)
    );

    // The big encoder must agree digit for digit.
    let big_digits =
        big_to_digits(&BigInt::from(value), radix, None).expect("radix is at least 2");
    assert_eq!(digits, big_digits);

    // Remaining bytes as an arbitrary digit string: the two decoders must
    // agree whenever the fixed-width one succeeds.
    let arbitrary: Vec<u16> = data[10..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    if let Ok(fixed) = from_digits(&arbitrary, radix) {
        assert_eq!(
            big_from_digits(&arbitrary, radix).expect("radix is at least 2"),
            BigInt::from(fixed)
        );
    }
});
