use sundry::maths::radix::{count_all_ascending, from_digits};

#[test]
fn counter_visits_every_value_exactly_once_in_order() {
    for (radix, places) in [(2u16, 5usize), (3, 4), (5, 3), (10, 2), (16, 2)] {
        let counter = count_all_ascending(radix, places).expect("valid arguments");
        let mut expected = 0i64;
        for digits in counter {
            assert_eq!(digits.len(), places);
            assert_eq!(
                from_digits(&digits, radix),
                Ok(expected),
                "radix {radix} places {places}"
            );
            expected += 1;
        }
        assert_eq!(
            expected,
            i64::from(radix).pow(places as u32),
            "radix {radix} places {places} total"
        );
    }
}

#[test]
fn counter_ends_at_all_max_digits() {
    let last = count_all_ascending(6, 3)
        .expect("valid arguments")
        .last()
        .expect("non-empty sequence");
    assert_eq!(last, vec![5, 5, 5]);
}

#[test]
fn counters_are_independent_of_each_other() {
    let mut first = count_all_ascending(4, 2).expect("valid arguments");
    let mut second = count_all_ascending(4, 2).expect("valid arguments");

    // Advance only the first; the second must still start from zero.
    first.next();
    first.next();
    assert_eq!(first.next(), Some(vec![0, 2]));
    assert_eq!(second.next(), Some(vec![0, 0]));
}

#[test]
fn yielded_arrays_survive_further_iteration() {
    let mut counter = count_all_ascending(2, 2).expect("valid arguments");
    let first = counter.next().expect("first element");
    let second = counter.next().expect("second element");
    counter.by_ref().for_each(drop);
    assert_eq!(first, vec![0, 0]);
    assert_eq!(second, vec![0, 1]);
}

#[test]
fn abandoning_a_counter_midway_is_fine() {
    let counter = count_all_ascending(10, 4).expect("valid arguments");
    let first_ten: Vec<Vec<u16>> = counter.take(10).collect();
    assert_eq!(first_ten.len(), 10);
    assert_eq!(first_ten[9], vec![0, 0, 0, 9]);
}
