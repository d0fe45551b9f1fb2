//! Bisection over ordered sequences.
//!
//! The comparison receives the search target first and a sequence element second, so the
//! target can be a different type from the elements (an id looked up in a list of records,
//! say). Every routine assumes the inspected range is already ordered consistently with the
//! comparison.
//!
//! The `_within` variants search the inclusive range `[lower, upper]` and reject bounds that
//! are inverted or run past the end of the sequence. The whole-sequence variants cannot fail:
//! an empty sequence simply has no match and an insertion point of 0.

use std::cmp::Ordering;

use crate::error::{CollectionError, Result};

fn check_bounds(len: usize, lower: usize, upper: usize) -> Result<()> {
    if lower > upper {
        return Err(CollectionError::InvertedBounds { lower, upper });
    }
    if upper >= len {
        return Err(CollectionError::UpperBoundOutOfRange { upper, len });
    }
    Ok(())
}

fn bisect<T, Q, F>(
    sequence: &[T],
    lower: usize,
    upper: usize,
    target: &Q,
    compare: &mut F,
) -> Option<usize>
where
    Q: ?Sized,
    F: FnMut(&Q, &T) -> Ordering,
{
    let (mut start, mut end) = (lower as isize, upper as isize);
    while start <= end {
        let mid = start + (end - start) / 2;
        match compare(target, &sequence[mid as usize]) {
            Ordering::Equal => return Some(mid as usize),
            Ordering::Less => end = mid - 1,
            Ordering::Greater => start = mid + 1,
        }
    }
    None
}

fn insertion<T, Q, F>(
    sequence: &[T],
    lower: usize,
    upper: usize,
    target: &Q,
    compare: &mut F,
) -> usize
where
    Q: ?Sized,
    F: FnMut(&Q, &T) -> Ordering,
{
    let (mut low, mut high) = (lower as isize, upper as isize);
    while low <= high {
        let mid = low + (high - low) / 2;
        match compare(target, &sequence[mid as usize]) {
            Ordering::Greater => low = mid + 1,
            Ordering::Less => high = mid - 1,
            Ordering::Equal => {
                // Tie-break: walk forward from the hit to the first element the target sorts
                // strictly before, so the target lands after every equal element from here on.
                return (mid as usize..=upper)
                    .find(|&i| compare(target, &sequence[i]) == Ordering::Less)
                    .unwrap_or(upper + 1);
            }
        }
    }
    // `low` never drops below `lower`.
    low as usize
}

/// The index of an element comparing equal to `target`, or `None`.
///
/// When several elements are equal the one returned is whichever the bisection reaches
/// first, not necessarily the leftmost or rightmost.
///
/// An empty `sequence` yields `None` rather than a range error; there is no valid
/// `[0, len - 1]` range to reject, and no element can match. Use [`binary_search_within`] to
/// have bounds validated.
pub fn binary_search<T, Q, F>(sequence: &[T], target: &Q, mut compare: F) -> Option<usize>
where
    Q: ?Sized,
    F: FnMut(&Q, &T) -> Ordering,
{
    if sequence.is_empty() {
        return None;
    }
    bisect(sequence, 0, sequence.len() - 1, target, &mut compare)
}

/// [`binary_search`] restricted to the inclusive index range `[lower, upper]`.
pub fn binary_search_within<T, Q, F>(
    sequence: &[T],
    lower: usize,
    upper: usize,
    target: &Q,
    mut compare: F,
) -> Result<Option<usize>>
where
    Q: ?Sized,
    F: FnMut(&Q, &T) -> Ordering,
{
    check_bounds(sequence.len(), lower, upper)?;
    Ok(bisect(sequence, lower, upper, target, &mut compare))
}

/// The index at which `target` could be inserted while keeping the sequence ordered.
///
/// If bisection hits an equal element, the result is found by scanning linearly forward from
/// that hit for the first element that `target` sorts strictly before; if there is none the
/// result is one past the end of the range. That scan is the tie-break policy: the insertion
/// point sits after the run of equal elements that the hit landed in. Without a hit the
/// result is where bisection stopped.
///
/// An empty `sequence` yields `0` rather than a range error, since the only place to insert
/// is the front. Use [`insertion_point_within`] to have bounds validated.
///
/// ```rust
/// use parrot_collections::compare::by_difference;
/// use parrot_collections::search::insertion_point;
///
/// assert_eq!(insertion_point(&[0, 1, 2, 5], &4, by_difference), 3);
/// assert_eq!(insertion_point(&[1, 2, 2, 3], &2, by_difference), 3);
/// ```
pub fn insertion_point<T, Q, F>(sequence: &[T], target: &Q, mut compare: F) -> usize
where
    Q: ?Sized,
    F: FnMut(&Q, &T) -> Ordering,
{
    if sequence.is_empty() {
        return 0;
    }
    insertion(sequence, 0, sequence.len() - 1, target, &mut compare)
}

/// [`insertion_point`] restricted to the inclusive index range `[lower, upper]`. The result
/// lies in `[lower, upper + 1]`.
pub fn insertion_point_within<T, Q, F>(
    sequence: &[T],
    lower: usize,
    upper: usize,
    target: &Q,
    mut compare: F,
) -> Result<usize>
where
    Q: ?Sized,
    F: FnMut(&Q, &T) -> Ordering,
{
    check_bounds(sequence.len(), lower, upper)?;
    Ok(insertion(sequence, lower, upper, target, &mut compare))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rand::{Rng, rng};

    use crate::compare::by_difference;
    use crate::error::CollectionError;
    use crate::search::{
        binary_search, binary_search_within, insertion_point, insertion_point_within,
    };

    #[test]
    fn test_binary_search_found_and_missing() {
        let v = [1, 3, 5, 7, 9, 11];
        for (i, x) in v.iter().enumerate() {
            assert_eq!(binary_search(&v, x, by_difference), Some(i));
        }
        for x in [0, 2, 4, 10, 12] {
            assert_eq!(binary_search(&v, &x, by_difference), None);
        }
        assert_eq!(binary_search(&[] as &[i32], &1, by_difference), None);
    }

    #[test]
    fn test_binary_search_ties_follow_search_path() {
        let v = [2, 2, 2, 2, 2];
        assert_eq!(binary_search(&v, &2, by_difference), Some(2));
        let v = [1, 2, 2, 2, 2, 2, 2, 2];
        assert_eq!(binary_search(&v, &2, by_difference), Some(3));
    }

    #[test]
    fn test_binary_search_within_bounds() {
        let v = [9, 9, 1, 2, 3, 0];
        assert_eq!(binary_search_within(&v, 2, 4, &3, by_difference), Ok(Some(4)));
        assert_eq!(binary_search_within(&v, 2, 4, &9, by_difference), Ok(None));
        assert_eq!(binary_search_within(&v, 3, 3, &2, by_difference), Ok(Some(3)));
    }

    #[test]
    fn test_bounds_errors() {
        let v = [1, 2, 3];
        assert_eq!(
            binary_search_within(&v, 2, 1, &1, by_difference),
            Err(CollectionError::InvertedBounds { lower: 2, upper: 1 })
        );
        assert_eq!(
            binary_search_within(&v, 0, 3, &1, by_difference),
            Err(CollectionError::UpperBoundOutOfRange { upper: 3, len: 3 })
        );
        assert_eq!(
            insertion_point_within(&v, 1, 0, &1, by_difference),
            Err(CollectionError::InvertedBounds { lower: 1, upper: 0 })
        );
        assert_eq!(
            insertion_point_within(&[] as &[i32], 0, 0, &1, by_difference),
            Err(CollectionError::UpperBoundOutOfRange { upper: 0, len: 0 })
        );
    }

    #[test]
    fn test_insertion_point_without_match() {
        let v = [0, 1, 2, 5];
        assert_eq!(insertion_point(&v, &4, by_difference), 3);
        assert_eq!(insertion_point(&v, &-1, by_difference), 0);
        assert_eq!(insertion_point(&v, &6, by_difference), 4);
        assert_eq!(insertion_point(&[] as &[i32], &6, by_difference), 0);
    }

    #[test]
    fn test_empty_sequence_whole_vs_bounded() {
        let empty: [i32; 0] = [];
        assert_eq!(binary_search(&empty, &1, by_difference), None);
        assert_eq!(insertion_point(&empty, &1, by_difference), 0);
        assert_eq!(
            binary_search_within(&empty, 0, 0, &1, by_difference),
            Err(CollectionError::UpperBoundOutOfRange { upper: 0, len: 0 })
        );
    }

    #[test]
    fn test_insertion_point_after_equal_run() {
        assert_eq!(insertion_point(&[1, 2, 2, 3], &2, by_difference), 3);
        assert_eq!(insertion_point(&[1, 2, 2, 2], &2, by_difference), 4);
        assert_eq!(insertion_point(&[2], &2, by_difference), 1);
        assert_eq!(insertion_point(&[0, 1, 2, 5], &5, by_difference), 4);
    }

    #[test]
    fn test_insertion_point_within_range() {
        let v = [100, 1, 2, 2, 3, -100];
        assert_eq!(insertion_point_within(&v, 1, 4, &2, by_difference), Ok(4));
        assert_eq!(insertion_point_within(&v, 1, 3, &2, by_difference), Ok(4));
        assert_eq!(insertion_point_within(&v, 1, 4, &0, by_difference), Ok(1));
        assert_eq!(insertion_point_within(&v, 1, 4, &7, by_difference), Ok(5));
    }

    #[test]
    fn test_heterogeneous_target() {
        struct Record {
            id: u32,
            name: &'static str,
        }
        let records = [
            Record { id: 3, name: "c" },
            Record { id: 8, name: "h" },
            Record { id: 12, name: "l" },
        ];
        let by_id = |id: &u32, r: &Record| id.cmp(&r.id);

        let found = binary_search(&records, &8, by_id).map(|i| records[i].name);
        assert_eq!(found, Some("h"));
        assert_eq!(insertion_point(&records, &10, by_id), 2);

        let names = ["ant", "bee", "cat"];
        let by_str = |target: &str, name: &&str| target.cmp(name);
        assert_eq!(binary_search(&names, "cat", by_str), Some(2));
    }

    #[test]
    fn test_random_insertion_keeps_order() {
        let mut rng = rng();
        for _ in 0..200 {
            let len = rng.random_range(1..60);
            let mut v: Vec<i32> = (0..len).map(|_| rng.random_range(0..20)).collect();
            v.sort();
            let target = rng.random_range(-2..22);

            let at = insertion_point(&v, &target, by_difference);
            assert!(at == 0 || v[at - 1] <= target);
            assert!(at == v.len() || target <= v[at]);

            match binary_search(&v, &target, |a: &i32, b: &i32| a.cmp(b)) {
                Some(i) => assert_eq!(v[i].cmp(&target), Ordering::Equal),
                None => assert!(!v.contains(&target)),
            }
        }
    }
}
