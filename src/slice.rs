#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::vec::Vec;

/// Ordered, index addressable and growable sequence of values.
///
/// [`Slice`] is built on top of a [`std::vec::Vec`] it owns exclusively.
/// Values keep their insertion order and duplicates are allowed.
///
/// * Append complexity is amortized `$O(1)$`.
/// * Prepend, insertion and removal at an index are `$O(n)$`: the
///   elements after the index are shifted by one position.
/// * Sorting is stable and `$O(n*log(n))$`.
///
/// Mutating methods return the receiver to allow chaining calls.
///
/// ## Examples
///
/// ```
/// use tidbits::Slice;
///
/// let mut s = Slice::new(vec![5, 3, 8, 1, 9]);
/// s.sort(|a, b| a.cmp(b));
/// assert_eq!(s.values(), &[1, 3, 5, 8, 9]);
/// assert_eq!(s.first(), 1);
/// assert_eq!(s.last(), 9);
/// assert_eq!(s.take(2), &[1, 3]);
///
/// s.prepend(0).append(10).remove_at(3);
/// assert_eq!(s.values(), &[0, 1, 3, 8, 9, 10]);
/// ```
///
/// Reading out of bounds with [`first()`](struct.Slice.html#method.first),
/// [`last()`](struct.Slice.html#method.last) or
/// [`get_at()`](struct.Slice.html#method.get_at) returns the default value
/// of the element type. Use [`get()`](struct.Slice.html#method.get) to
/// tell a missing element from a default one.
///
/// [`values()`](struct.Slice.html#method.values),
/// [`values_mut()`](struct.Slice.html#method.values_mut) and
/// [`take()`](struct.Slice.html#method.take) return views borrowing the
/// slice storage. [`clone()`](struct.Slice.html#method.clone) is the only
/// way to obtain an independent copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Slice<T> {
    values: Vec<T>,
}

impl<T> Slice<T> {
    /// Wrap `values` into a [`Slice`]. No copy is made.
    pub fn new(values: Vec<T>) -> Self {
        Slice { values }
    }

    /// Remove every element.
    pub fn reset(&mut self) -> &mut Self {
        self.values.clear();
        self
    }

    /// Push `value` at the end.
    pub fn append(&mut self, value: T) -> &mut Self {
        self.values.push(value);
        self
    }

    /// Insert `value` at index 0.
    pub fn prepend(&mut self, value: T) -> &mut Self {
        self.insert_at(0, value)
    }

    /// Insert `value` at index `idx`, shifting the elements at and after
    /// `idx` one position to the right.
    ///
    /// ## Panics
    ///
    /// Panics if `idx > len()`.
    pub fn insert_at(&mut self, idx: usize, value: T) -> &mut Self {
        self.values.insert(idx, value);
        self
    }

    /// Remove the element at index `idx`, shifting the elements after
    /// `idx` one position to the left.
    ///
    /// ## Panics
    ///
    /// Panics if `idx >= len()`.
    pub fn remove_at(&mut self, idx: usize) -> &mut Self {
        self.values.remove(idx);
        self
    }

    /// Stable sort of the elements with a comparison function.
    pub fn sort<F>(&mut self, cmp: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.values.sort_by(cmp);
        self
    }

    /// Check whether at least one element matches `predicate`.
    /// Stops at the first match.
    pub fn exists<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.values.iter().any(predicate)
    }

    /// Reference to the element at index `idx` if any.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.values.get(idx)
    }

    /// View of the elements, in order.
    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Mutable view of the elements, in order.
    /// Writes through this view are writes to this [`Slice`].
    pub fn values_mut(&mut self) -> &mut [T] {
        self.values.as_mut_slice()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the slice holds no element.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Call `f` on each element in order.
    ///
    /// The iteration stops at the first error returned by `f` and this
    /// error is returned.
    pub fn enumerate<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        for item in self.values.iter() {
            f(item)?;
        }
        Ok(())
    }

    /// View of the first `n` elements, or all of them if there are less
    /// than `n`.
    pub fn take(&self, n: usize) -> &[T] {
        &self.values[..n.min(self.values.len())]
    }

    /// Build a new [`Slice`] with `f` applied to every element.
    pub fn map<U, F>(&self, f: F) -> Slice<U>
    where
        F: FnMut(&T) -> U,
    {
        Slice {
            values: self.values.iter().map(f).collect(),
        }
    }

    /// Fold elements from first to last, starting with `init`.
    pub fn reduce<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.values.iter().fold(init, f)
    }

    /// Unwrap the underlying vector.
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: Clone> Slice<T> {
    /// Build a new [`Slice`] with the elements matching `predicate`,
    /// in order.
    pub fn select<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Slice {
            values: self
                .values
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }
}

impl<T: Clone + Default> Slice<T> {
    /// First element, or `T::default()` if empty.
    pub fn first(&self) -> T {
        self.values.first().cloned().unwrap_or_default()
    }

    /// Last element, or `T::default()` if empty.
    pub fn last(&self) -> T {
        self.values.last().cloned().unwrap_or_default()
    }

    /// Element at index `idx`, or `T::default()` if `idx` is out of
    /// bounds.
    pub fn get_at(&self, idx: usize) -> T {
        self.get(idx).cloned().unwrap_or_default()
    }
}

//-------------------------------------------------------------------------
//  Conversions.
//-------------------------------------------------------------------------

impl<T> From<Vec<T>> for Slice<T> {
    fn from(values: Vec<T>) -> Self {
        Slice::new(values)
    }
}

impl<T> From<Slice<T>> for Vec<T> {
    fn from(slice: Slice<T>) -> Self {
        slice.values
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Slice {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Slice<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter)
    }
}

impl<T> IntoIterator for Slice<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Slice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
