//! In-place quicksort and ordered insertion driven by a comparison function.

use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::{instrument, trace};

/// Sorts `sequence` in place with a Hoare-partition quicksort.
///
/// The pivot is always the middle element of the range being partitioned, after which
/// `[left, j]` and `[i, right]` are sorted in turn. There is no randomisation, so already
/// ordered and adversarial inputs take quadratic time. The sort is not stable.
///
/// Pending ranges live on an explicit stack rather than the call stack; the resulting
/// arrangement is identical to the recursive formulation.
#[instrument(level = "trace", skip_all, fields(len = sequence.len()))]
pub fn quicksort<T, F>(sequence: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if sequence.len() < 2 {
        return;
    }

    let mut partitions = 0usize;
    let mut pending = vec![(0isize, sequence.len() as isize - 1)];
    while let Some((left, right)) = pending.pop() {
        let (j, i) = partition(sequence, left, right, &mut compare);
        partitions += 1;

        // Pushed right-first so the left range is sorted first, as recursion would.
        if i < right {
            pending.push((i, right));
        }
        if left < j {
            pending.push((left, j));
        }
    }
    trace!(partitions, "quicksort complete");
}

/// Partitions `[left, right]` around the value of its middle element, returning the final
/// `(j, i)` cursors. Everything in `[left, j]` compares no greater than the pivot value and
/// everything in `[i, right]` no less.
fn partition<T, F>(
    sequence: &mut [T],
    left: isize,
    right: isize,
    compare: &mut F,
) -> (isize, isize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = left;
    let mut j = right;
    // The pivot value stays put in the slice, so follow it through the swaps.
    let mut pivot = ((left + right) / 2) as usize;

    while i <= j {
        while compare(&sequence[i as usize], &sequence[pivot]) == Ordering::Less {
            i += 1;
        }
        while compare(&sequence[pivot], &sequence[j as usize]) == Ordering::Less {
            j -= 1;
        }
        if i <= j {
            let (a, b) = (i as usize, j as usize);
            sequence.swap(a, b);
            if pivot == a {
                pivot = b;
            } else if pivot == b {
                pivot = a;
            }
            i += 1;
            j -= 1;
        }
    }
    (j, i)
}

/// The index of the first element `item` sorts strictly before, or `len` if there is none.
fn sorted_position<'a, T, F>(
    elements: impl IntoIterator<Item = &'a T>,
    len: usize,
    item: &T,
    compare: &mut F,
) -> usize
where
    T: 'a,
    F: FnMut(&T, &T) -> Ordering,
{
    let index = elements
        .into_iter()
        .position(|element| compare(item, element) == Ordering::Less)
        .unwrap_or(len);
    trace!(index, len, "sorted insert");
    index
}

/// Inserts `item` before the first element it sorts strictly before, or at the end if there
/// is none, returning the index it landed at.
///
/// This is a linear scan from the front and assumes `list` is already ordered by `compare`.
/// Items equal to existing elements go after them.
pub fn insert_sorted<T, F>(list: &mut Vec<T>, item: T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let index = sorted_position(list.iter(), list.len(), &item, &mut compare);
    list.insert(index, item);
    index
}

/// Ordered insertion for growable sequences.
pub trait SortedInsert<T> {
    /// See [`insert_sorted`].
    fn insert_sorted_by<F>(&mut self, item: T, compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering;
}

impl<T> SortedInsert<T> for Vec<T> {
    fn insert_sorted_by<F>(&mut self, item: T, compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        insert_sorted(self, item, compare)
    }
}

impl<T> SortedInsert<T> for VecDeque<T> {
    fn insert_sorted_by<F>(&mut self, item: T, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let index = sorted_position(self.iter(), self.len(), &item, &mut compare);
        self.insert(index, item);
        index
    }
}
