#![no_main]

use std::cmp::Ordering;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use parrot_collections::CollectionError;
use parrot_collections::SliceExt;

#[derive(Arbitrary, Debug)]
struct SearchInput {
    values: Vec<i8>,
    targets: Vec<i8>,
    lower: u8,
    upper: u8,
}

fuzz_target!(|input: SearchInput| {
    let mut values = input.values;
    values.sort();
    let by_value = |a: &i8, b: &i8| a.cmp(b);

    for target in &input.targets {
        match values.bisect_by(target, by_value) {
            Some(i) => assert_eq!(values[i], *target),
            None => assert!(!values.contains(target)),
        }

        let at = values.insertion_point_by(target, by_value);
        assert!(at <= values.len());
        assert!(at == 0 || values[at - 1] <= *target);
        assert!(at == values.len() || *target < values[at]);
    }

    let (lower, upper) = (input.lower as usize, input.upper as usize);
    for target in &input.targets {
        let found = values.bisect_within_by(lower, upper, target, by_value);
        let at = values.insertion_point_within_by(lower, upper, target, by_value);
        if lower > upper {
            assert_eq!(found, Err(CollectionError::InvertedBounds { lower, upper }));
            assert!(at.is_err());
            continue;
        }
        if upper >= values.len() {
            assert_eq!(
                found,
                Err(CollectionError::UpperBoundOutOfRange {
                    upper,
                    len: values.len()
                })
            );
            assert!(at.is_err());
            continue;
        }

        let range = &values[lower..=upper];
        match found {
            Ok(Some(i)) => assert_eq!(values[i].cmp(target), Ordering::Equal),
            Ok(None) => assert!(!range.contains(target)),
            Err(e) => panic!("unexpected error {e}"),
        }
        match at {
            Ok(at) => {
                assert!((lower..=upper + 1).contains(&at));
                assert!(at == lower || values[at - 1] <= *target);
                assert!(at == upper + 1 || *target < values[at]);
            }
            Err(e) => panic!("unexpected error {e}"),
        }
    }
});
