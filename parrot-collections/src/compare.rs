//! Comparison-function adapters.
//!
//! Every sort and search routine in this crate is driven by a caller-supplied comparison
//! function with the usual sign convention: [`Ordering::Less`] means the first argument sorts
//! before the second. [`Comparator`] bundles such a function with a hash function so the same
//! ordering can also serve as equality and hashing, and [`Keyed`] lends that behavior to the
//! standard collections.

use std::any::{Any, type_name};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::rc::Rc;

use num_traits::Signed;

use crate::error::{CollectionError, Result};

type CompareFn<'f, T> = Rc<dyn Fn(&T, &T) -> Ordering + 'f>;
type HashFn<'f, T> = Rc<dyn Fn(&T) -> u64 + 'f>;

/// An immutable pairing of a comparison function and a hash function.
///
/// Equality is derived from the comparison (`compare(a, b) == Equal`). Keeping the hash
/// consistent with that equality is the caller's job; nothing here checks it.
pub struct Comparator<'f, T: ?Sized> {
    compare: CompareFn<'f, T>,
    hash: HashFn<'f, T>,
}

impl<T: ?Sized> Clone for Comparator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
            hash: Rc::clone(&self.hash),
        }
    }
}

impl<'f, T: ?Sized + 'f> Comparator<'f, T> {
    /// Wraps `compare`, hashing values through their own [`Hash`] implementation.
    pub fn new<C>(compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'f,
        T: Hash,
    {
        Self::with_hasher(compare, |value: &T| {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        })
    }

    pub fn with_hasher<C, H>(compare: C, hash: H) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'f,
        H: Fn(&T) -> u64 + 'f,
    {
        Self {
            compare: Rc::new(compare),
            hash: Rc::new(hash),
        }
    }

    #[inline]
    pub fn compare(&self, first: &T, second: &T) -> Ordering {
        (self.compare)(first, second)
    }

    #[inline]
    pub fn equals(&self, first: &T, second: &T) -> bool {
        self.compare(first, second) == Ordering::Equal
    }

    #[inline]
    pub fn hash_of(&self, value: &T) -> u64 {
        (self.hash)(value)
    }

    /// Pairs `value` with this comparator so it can be stored in ordered or hashed std
    /// collections.
    pub fn key<'a>(&'a self, value: &'a T) -> Keyed<'a, T> {
        Keyed {
            value,
            comparator: self,
        }
    }

    /// The items of `items` with later duplicates (under [`Comparator::equals`]) removed,
    /// keeping first occurrences in their original order.
    pub fn distinct(&self, items: &[T]) -> Vec<T>
    where
        T: Clone + Sized,
    {
        let mut seen = HashSet::with_capacity(items.len());
        items
            .iter()
            .filter(|item| seen.insert(self.key(item)))
            .cloned()
            .collect()
    }
}

impl<'f, T: 'static> Comparator<'f, T> {
    /// Compares two type-erased operands, both of which must be `T`.
    pub fn compare_any(&self, first: &dyn Any, second: &dyn Any) -> Result<Ordering> {
        let mismatch = || CollectionError::TypeMismatch {
            expected: type_name::<T>(),
        };
        let first = first.downcast_ref::<T>().ok_or_else(mismatch)?;
        let second = second.downcast_ref::<T>().ok_or_else(mismatch)?;
        Ok(self.compare(first, second))
    }
}

/// A borrowed value whose `Eq`, `Ord` and `Hash` come from a [`Comparator`].
pub struct Keyed<'a, T: ?Sized> {
    value: &'a T,
    comparator: &'a Comparator<'a, T>,
}

impl<'a, T: ?Sized> Keyed<'a, T> {
    pub fn value(&self) -> &'a T {
        self.value
    }
}

impl<T: ?Sized> Clone for Keyed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Keyed<'_, T> {}

impl<T: ?Sized> PartialEq for Keyed<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparator.equals(self.value, other.value)
    }
}

impl<T: ?Sized> Eq for Keyed<'_, T> {}

impl<T: ?Sized> PartialOrd for Keyed<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for Keyed<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparator.compare(self.value, other.value)
    }
}

impl<T: ?Sized> Hash for Keyed<'_, T> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        state.write_u64(self.comparator.hash_of(self.value));
    }
}

/// Orders two numbers by the sign of `first - second`.
///
/// The subtraction is performed in `T`, so integer operands whose difference overflows panic
/// in debug builds. Incomparable values (NaN) compare as equal.
pub fn by_difference<T>(first: &T, second: &T) -> Ordering
where
    T: Signed + Clone,
{
    let difference = first.clone() - second.clone();
    if difference.is_positive() {
        Ordering::Greater
    } else if difference.is_negative() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}
