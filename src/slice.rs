//! Helpers over plain slices.
//!
//! The set operations here ([`slice_union`], [`slice_intersection`], [`slice_complement`],
//! [`slice_difference`]) convert their inputs into [`Set`]s first. Duplicates in the inputs are
//! ignored and the output order is unspecified. The remaining helpers preserve order and do not
//! need their elements to be hashable.

use crate::prelude::*;

// -------------------- Errors -------------------- //

/// Error returned by [`first`] and [`last`] on an empty slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptySliceError;

impl Display for EmptySliceError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str("empty slice has no first or last element")
    }
}

impl std::error::Error for EmptySliceError {}

// -------------------- Set conversions -------------------- //

/// Builds a set out of the elements of a slice, dropping duplicates.
#[must_use]
pub fn slice_to_set<T: Eq + Hash + Clone>(slice: &[T]) -> Set<T> {
    let mut set = Set::with_capacity(slice.len());
    set.extend(slice.iter().cloned());
    set
}

/// Maps every element of a slice through `f` and collects the images into a set.
///
/// Unlike [`map_slice`], images that coincide are merged.
#[must_use]
pub fn map_slice_to_set<S, T: Eq + Hash, F: FnMut(&S) -> T>(slice: &[S], f: F) -> Set<T> {
    let mut set = Set::with_capacity(slice.len());
    set.extend(slice.iter().map(f));
    set
}

/// Union of two slices.
#[must_use]
pub fn slice_union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    slice_to_set(a).into_union(slice_to_set(b)).into_iter().collect()
}

/// Intersection of two slices.
#[must_use]
pub fn slice_intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    slice_to_set(a).intersection(&slice_to_set(b)).into_iter().collect()
}

/// The elements of `b` that are not in `a`. See [`Set::complement`].
#[must_use]
pub fn slice_complement<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    slice_to_set(a).complement(&slice_to_set(b)).into_iter().collect()
}

/// The elements of `a` that are not in `b`. See [`Set::difference`].
#[must_use]
pub fn slice_difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    slice_to_set(a).difference(&slice_to_set(b)).into_iter().collect()
}

// -------------------- Order-preserving helpers -------------------- //

/// Partitions a slice by the value of `key` on each element.
///
/// Within each group, elements keep the order in which they appear in the slice. The order of the
/// groups themselves is unspecified.
pub fn grouped_by_slice<T: Clone, K: Eq + Hash, F: FnMut(&T) -> K>(
    slice: &[T],
    mut key: F,
) -> HashMap<K, Vec<T>> {
    let mut groups = HashMap::<K, Vec<T>>::new();
    for el in slice {
        groups.entry(key(el)).or_default().push(el.clone());
    }
    groups
}

/// Calls `f` on every element of the slice, in order.
pub fn foreach_slice<T, F: FnMut(&T)>(slice: &[T], f: F) {
    slice.iter().for_each(f);
}

/// The elements of the slice satisfying `pred`, in order.
#[must_use]
pub fn filter_slice<T: Clone, P: FnMut(&T) -> bool>(slice: &[T], mut pred: P) -> Vec<T> {
    slice.iter().filter(|&el| pred(el)).cloned().collect()
}

/// Maps every element of the slice through `convert`, in order.
///
/// The output always has the same length as the input.
#[must_use]
pub fn map_slice<T, S, F: FnMut(&T) -> S>(slice: &[T], convert: F) -> Vec<S> {
    slice.iter().map(convert).collect()
}

/// Whether `value` appears in the slice. This is a linear scan.
#[must_use]
pub fn contains_slice<T: PartialEq>(slice: &[T], value: &T) -> bool {
    slice.iter().any(|el| el == value)
}

/// The first element of the slice.
///
/// ## Errors
///
/// Returns [`EmptySliceError`] if the slice is empty.
pub fn first<T>(slice: &[T]) -> Result<&T, EmptySliceError> {
    slice.first().ok_or(EmptySliceError)
}

/// The last element of the slice.
///
/// ## Errors
///
/// Returns [`EmptySliceError`] if the slice is empty.
pub fn last<T>(slice: &[T]) -> Result<&T, EmptySliceError> {
    slice.last().ok_or(EmptySliceError)
}
