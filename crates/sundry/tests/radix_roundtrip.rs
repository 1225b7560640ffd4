use num_bigint::BigInt;

use sundry::maths::radix::{
    big_from_digits, big_to_digits, from_digits, to_digits, RadixError,
};

#[test]
fn encode_decode_round_trips_across_bases() {
    let radixes = [2u16, 3, 7, 10, 16, 255, 256, 6537, u16::MAX];
    let values = (0i64..200)
        .chain([999, 65_535, 65_536, 1_000_003, i64::MAX - 1, i64::MAX]);

    for value in values {
        for radix in radixes {
            let digits = to_digits(value, radix, None).expect("valid radix");
            assert!(!digits.is_empty());
            assert!(
                digits.iter().all(|&digit| u64::from(digit) < u64::from(radix)),
                "digit out of range encoding {value} in base {radix}"
            );
            assert_eq!(
                from_digits(&digits, radix),
                Ok(value),
                "round trip of {value} in base {radix}"
            );
        }
    }
}

#[test]
fn negative_values_round_trip_to_their_absolute_value() {
    for value in [-1i64, -7, -4627, -65_536, -(1 << 40)] {
        let digits = to_digits(value, 10, None).expect("valid radix");
        assert_eq!(from_digits(&digits, 10), Ok(-value));
    }
}

#[test]
fn padding_does_not_change_the_decoded_value() {
    for places in 0..30usize {
        let digits = to_digits(4627, 10, Some(places)).expect("valid radix");
        assert_eq!(digits.len(), places.max(4));
        assert_eq!(from_digits(&digits, 10), Ok(4627));
    }
}

#[test]
fn big_round_trips_agree_with_fixed_width_inside_i64() {
    for value in [0i64, 1, 4627, 6536, i64::MAX] {
        for radix in [2u16, 10, 6537] {
            let fixed = to_digits(value, radix, None).expect("valid radix");
            let big = big_to_digits(&BigInt::from(value), radix, None).expect("valid radix");
            assert_eq!(fixed, big, "value {value} radix {radix}");
            assert_eq!(
                big_from_digits(&fixed, radix),
                Ok(BigInt::from(value)),
                "value {value} radix {radix}"
            );
        }
    }
}

#[test]
fn big_round_trips_far_past_i64() {
    let value: BigInt = BigInt::from(7).pow(100);
    for radix in [2u16, 10, 16, u16::MAX] {
        let digits = big_to_digits(&value, radix, None).expect("valid radix");
        assert_eq!(
            big_from_digits(&digits, radix),
            Ok(value.clone()),
            "radix {radix}"
        );
        // The same digits overflow the fixed-width decoder.
        assert_eq!(from_digits(&digits, radix), Err(RadixError::Overflow));
    }
}

#[test]
fn every_operation_rejects_radix_below_two() {
    for radix in [0u16, 1] {
        assert_eq!(to_digits(1, radix, None), Err(RadixError::RadixTooSmall));
        assert_eq!(from_digits(&[1], radix), Err(RadixError::RadixTooSmall));
        assert_eq!(
            big_to_digits(&BigInt::from(1), radix, None),
            Err(RadixError::RadixTooSmall)
        );
        assert_eq!(
            big_from_digits(&[1], radix),
            Err(RadixError::RadixTooSmall)
        );
    }
}
