#![no_main]

use libfuzzer_sys::fuzz_target;
use sundry::maths::radix::{count_all_ascending, from_digits};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // Keep the sequence small enough to walk exhaustively.
    let radix = (u16::from(data[0]) % 16).max(2);
    let places = usize::from(data[1] % 4).max(1);
    let skip = usize::from(data[2]);

    let counter = count_all_ascending(radix, places).expect("arguments forced valid");
    let mut previous: Option<i64> = None;
    for digits in counter.skip(skip) {
        let value = from_digits(&digits, radix).expect("counter digits stay in range");
        if let Some(previous) = previous {
            assert_eq!(value, previous + 1, "counter must ascend by exactly one");
        }
        previous = Some(value);
    }
});
