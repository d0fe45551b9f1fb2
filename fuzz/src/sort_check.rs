#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use parrot_collections::SliceExt;
use parrot_collections::SortedInsert;

#[derive(Arbitrary, Debug)]
enum SortInput {
    Quicksort { values: Vec<i16> },
    QuicksortDescending { values: Vec<i16> },
    // Sort on the first field only; the second field must come along as a permutation.
    QuicksortKeyed { pairs: Vec<(u8, u16)> },
    InsertSorted { values: Vec<i16> },
}

fuzz_target!(|input: SortInput| {
    match input {
        SortInput::Quicksort { values } => {
            let mut expected = values.clone();
            expected.sort_unstable();
            let mut actual = values;
            actual.quicksort_by(|a, b| a.cmp(b));
            assert_eq!(actual, expected);
        }
        SortInput::QuicksortDescending { values } => {
            let mut expected = values.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            let mut actual = values;
            actual.quicksort_by(|a, b| b.cmp(a));
            assert_eq!(actual, expected);
        }
        SortInput::QuicksortKeyed { pairs } => {
            let mut expected = pairs.clone();
            expected.sort_unstable();
            let mut actual = pairs;
            actual.quicksort_by(|a, b| a.0.cmp(&b.0));
            assert!(actual.windows(2).all(|w| w[0].0 <= w[1].0));
            actual.sort_unstable();
            assert_eq!(actual, expected);
        }
        SortInput::InsertSorted { values } => {
            let mut list = Vec::with_capacity(values.len());
            for value in values.iter().copied() {
                let index = list.insert_sorted_by(value, |a: &i16, b: &i16| a.cmp(b));
                assert_eq!(list[index], value);
                // Equal items go after the existing run.
                assert!(list[index + 1..].iter().all(|v| *v > value));
            }
            let mut expected = values;
            expected.sort();
            assert_eq!(list, expected);
        }
    }
});
