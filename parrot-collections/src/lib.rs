//! Collection building blocks: a dense [`Matrix`], owned tree nodes with shape-agnostic
//! traversal, and sort/search routines driven by caller-supplied comparison functions.

use std::cmp::Ordering;

pub mod compare;
pub mod error;
pub mod matrix;
pub mod node;
pub mod search;
pub mod sort;
pub mod traversal;
mod utils;

pub use compare::{Comparator, Keyed};
pub use error::{CollectionError, Result};
pub use matrix::{Matrix, ResizeMode};
pub use node::{BinaryTreeNode, TreeNode};
pub use sort::SortedInsert;

/// Method-call access to [`sort`] and [`search`] on slices.
///
/// ```rust
/// use parrot_collections::SliceExt;
///
/// let mut v = [3, 1, 2];
/// v.quicksort_by(|a, b| a.cmp(b));
/// assert_eq!(v.bisect_by(&2, |a, b| a.cmp(b)), Some(1));
/// assert_eq!(v.insertion_point_by(&5, |a, b| a.cmp(b)), 3);
/// ```
pub trait SliceExt<T> {
    fn quicksort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn bisect_by<Q, F>(&self, target: &Q, compare: F) -> Option<usize>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering;

    fn bisect_within_by<Q, F>(
        &self,
        lower: usize,
        upper: usize,
        target: &Q,
        compare: F,
    ) -> Result<Option<usize>>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering;

    fn insertion_point_by<Q, F>(&self, target: &Q, compare: F) -> usize
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering;

    fn insertion_point_within_by<Q, F>(
        &self,
        lower: usize,
        upper: usize,
        target: &Q,
        compare: F,
    ) -> Result<usize>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering;
}

impl<T> SliceExt<T> for [T] {
    fn quicksort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quicksort(self, compare)
    }

    fn bisect_by<Q, F>(&self, target: &Q, compare: F) -> Option<usize>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        search::binary_search(self, target, compare)
    }

    fn bisect_within_by<Q, F>(
        &self,
        lower: usize,
        upper: usize,
        target: &Q,
        compare: F,
    ) -> Result<Option<usize>>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        search::binary_search_within(self, lower, upper, target, compare)
    }

    fn insertion_point_by<Q, F>(&self, target: &Q, compare: F) -> usize
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        search::insertion_point(self, target, compare)
    }

    fn insertion_point_within_by<Q, F>(
        &self,
        lower: usize,
        upper: usize,
        target: &Q,
        compare: F,
    ) -> Result<usize>
    where
        Q: ?Sized,
        F: FnMut(&Q, &T) -> Ordering,
    {
        search::insertion_point_within(self, lower, upper, target, compare)
    }
}
