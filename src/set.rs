//! Hash sets [`Set`] and their algebra.

use crate::prelude::*;

/// An unordered collection of unique elements.
///
/// ## Invariants
///
/// Every two elements in a [`Set`] are distinct under [`Eq`]. Iteration order is unspecified and
/// may differ between two equal sets.
///
/// A [`Set`] does no locking of its own. Mutating one from several threads requires the caller to
/// wrap it in a `Mutex` or similar.
///
/// Sets convert to and from [`HashSet`] for interop with code that already holds one. Nothing else
/// in the API exposes the backing store.
#[derive(Clone, From, IntoIterator)]
pub struct Set<T>(#[into_iterator(owned, ref)] HashSet<T>);

// -------------------- Basic traits -------------------- //

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self(HashSet::new())
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> From<Set<T>> for HashSet<T> {
    fn from(set: Set<T>) -> Self {
        set.0
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.0)
    }
}

/// Displays a set in roster notation, e.g. `{1, 2, 3}`. Elements appear in iteration order.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.0.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for el in iter {
            write!(f, ", {el}")?;
        }
        f.write_char('}')
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Set<T> {
    /// The empty set Ø.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The empty set, with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity(capacity))
    }

    /// Set cardinality.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements of the set, in no particular order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + Clone + '_ {
        self.0.iter()
    }

    /// Returns the smaller and the larger of two sets. Ties go to `other` as the smaller one.
    fn small_large<'a>(&'a self, other: &'a Self) -> (&'a Self, &'a Self) {
        if other.len() > self.len() {
            (self, other)
        } else {
            (other, self)
        }
    }
}

impl<T: Eq + Hash> Set<T> {
    /// In-place insertion x ∪ {key}.
    ///
    /// Returns whether `key` was not already present. Adding an existing key leaves the set
    /// unchanged.
    pub fn add(&mut self, key: T) -> bool {
        self.0.insert(key)
    }

    /// In-place removal x \ {key}.
    ///
    /// Returns whether `key` was present. Removing a missing key is a no-op.
    pub fn remove(&mut self, key: &T) -> bool {
        self.0.remove(key)
    }

    /// Membership relation ∈.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.0.contains(key)
    }

    /// Subset relation ⊆.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|el| other.contains(el))
    }

    /// Set equality. Holds exactly when both `self \ other` and `other \ self` are empty.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.is_subset(other) && other.is_subset(self)
    }

    /// Union x ∪ y, consuming both sets.
    ///
    /// The elements of the smaller set are moved into the larger one, whose storage is reused.
    #[must_use]
    pub fn into_union(self, other: Self) -> Self {
        let (small, mut large) = if other.len() > self.len() {
            (self, other)
        } else {
            (other, self)
        };

        large.extend(small);
        large
    }

    // -------------------- Constructions -------------------- //

    /// Set specification {x ∈ self | pred(x)}.
    #[must_use]
    pub fn filter<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Self
    where
        T: Clone,
    {
        self.iter().filter(|&el| pred(el)).cloned().collect()
    }

    /// Image of the set under `convert`.
    ///
    /// Elements with the same image are merged, so the result can be smaller than `self`.
    #[must_use]
    pub fn map<S: Eq + Hash, F: FnMut(&T) -> S>(&self, convert: F) -> Set<S> {
        self.iter().map(convert).collect()
    }

    /// Copies the elements of the set into a vector, in no particular order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Union x ∪ y.
    ///
    /// The larger set is cloned and the smaller one is iterated into the copy. Neither operand is
    /// modified; see [`Set::into_union`] to reuse the storage instead.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (small, large) = self.small_large(other);
        let mut res = large.clone();
        res.extend(small.iter().cloned());
        res
    }

    /// Intersection x ∩ y.
    ///
    /// Runs in O(min(|x|, |y|)) by probing the larger set with the elements of the smaller.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = self.small_large(other);
        small.filter(|el| large.contains(el))
    }

    /// Difference x \ y. Note that x \ y and y \ x differ in general.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|el| !other.contains(el))
    }

    /// The elements of `other` that are not in `self`, i.e. `other \ self`.
    ///
    /// The result ranges over `other`: `self` is the set being excluded.
    #[must_use]
    pub fn excluded_from(&self, other: &Self) -> Self {
        other.difference(self)
    }

    /// Relative complement of `self` in `other`, i.e. `other \ self`.
    ///
    /// Same as [`Set::excluded_from`].
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        self.excluded_from(other)
    }
}
