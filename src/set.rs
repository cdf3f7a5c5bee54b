use crate::Slice;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Eq;
use std::collections::hash_set::{self, HashSet};
use std::hash::Hash;

/// Unordered collection of unique values.
///
/// [`Set`] is built on top of a [`std::collections::HashSet`].
/// Inserting a value already in the set has no effect, and so does
/// removing a value that is not in the set.
/// The iteration order of values is unspecified.
///
/// * Insertion, removal and lookup complexity is `$O(1)$` on average.
/// * [`union()`](struct.Set.html#method.union),
/// [`intersection()`](struct.Set.html#method.intersection) and
/// [`difference()`](struct.Set.html#method.difference) build a new set
/// and are `$O(n)$`.
///
/// ## Examples
///
/// ```
/// use tidbits::Set;
///
/// let a = Set::from_values(vec!["a", "b", "c"]);
/// let b = Set::from_values(vec!["b", "c", "d"]);
///
/// assert_eq!(a.union(&b).len(), 4);
/// assert_eq!(a.intersection(&b), Set::from_values(vec!["b", "c"]));
/// assert_eq!(a.difference(&b), Set::from_values(vec!["a"]));
/// assert!(a.intersection(&b).proper_subset_of(&a));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "T: Serialize",
            deserialize = "T: Deserialize<'de> + Eq + Hash"
        )
    )
)]
pub struct Set<T> {
    hash: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Set {
            hash: HashSet::new(),
        }
    }

    /// Create a set holding `values`. Duplicates collapse.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Set {
            hash: values.into_iter().collect(),
        }
    }

    /// Add `element` to the set.
    pub fn insert(&mut self, element: T) {
        self.hash.insert(element);
    }

    /// Add every element of `elements` to the set.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.hash.extend(elements)
    }

    /// Remove `element` from the set if it is present.
    pub fn remove(&mut self, element: &T) {
        self.hash.remove(element);
    }

    /// Remove every element of `elements` from the set.
    pub fn remove_all<'a, I>(&mut self, elements: I)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for element in elements {
            self.hash.remove(element);
        }
    }

    /// Remove every element from the set.
    pub fn clear(&mut self) {
        self.hash.clear()
    }

    /// Check whether `element` is in the set.
    pub fn has(&self, element: &T) -> bool {
        self.hash.contains(element)
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.hash.len()
    }

    /// Check whether the set holds at least one element.
    pub fn has_items(&self) -> bool {
        !self.hash.is_empty()
    }

    /// Check whether the set holds no element.
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Iterate elements in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.hash.iter()
    }

    /// Call `f` once on each element.
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.hash.iter().for_each(f)
    }

    /// Call `f` once on each element.
    ///
    /// The iteration stops at the first error returned by `f` and this
    /// error is returned.
    pub fn try_for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        for element in self.hash.iter() {
            f(element)?;
        }
        Ok(())
    }

    /// Remove every element of `other` from this set.
    pub fn remove_set(&mut self, other: &Set<T>) {
        self.remove_all(other.iter())
    }

    /// Check whether every element of this set is in `other`.
    pub fn subset_of(&self, other: &Set<T>) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.hash.iter().all(|k| other.has(k))
    }

    /// Check whether this set is a subset of `other` and `other` holds
    /// more elements.
    pub fn proper_subset_of(&self, other: &Set<T>) -> bool {
        self.subset_of(other) && self.len() < other.len()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Snapshot of the set elements in unspecified order.
    pub fn values(&self) -> Vec<T> {
        self.hash.iter().cloned().collect()
    }

    /// Snapshot of the set elements as a [`Slice`](struct.Slice.html),
    /// in unspecified order.
    pub fn to_slice(&self) -> Slice<T> {
        self.hash.iter().cloned().collect()
    }

    /// New set of the elements in this set or in `other`.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        Set {
            hash: self.hash.union(&other.hash).cloned().collect(),
        }
    }

    /// New set of the elements both in this set and in `other`.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        Set {
            hash: self.hash.intersection(&other.hash).cloned().collect(),
        }
    }

    /// New set of the elements of this set that are not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        Set {
            hash: self.hash.difference(&other.hash).cloned().collect(),
        }
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Set::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

//-------------------------------------------------------------------------
//  Conversions.
//-------------------------------------------------------------------------

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        Set::from_values(values)
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set::from_values(iter)
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter)
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.hash.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.hash.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Set;
    use rand::random;

    fn random_set(n: usize) -> Set<u8> {
        (0..n).map(|_| random::<u8>() % 64).collect()
    }

    #[test]
    fn test_set_algebra_scenario() {
        let a = Set::from_values(vec!["a", "b", "c"]);
        let b = Set::from_values(vec!["b", "c", "d"]);

        let u = a.union(&b);
        assert_eq!(u.len(), 4);
        assert!(["a", "b", "c", "d"].iter().all(|k| u.has(k)));

        let i = a.intersection(&b);
        assert_eq!(i.len(), 2);
        assert!(i.has(&"b") && i.has(&"c"));

        let d = a.difference(&b);
        assert_eq!(d.len(), 1);
        assert!(d.has(&"a"));
        assert_eq!(b.difference(&a), Set::from_values(vec!["d"]));
    }

    #[test]
    fn test_insert_remove_idempotent() {
        let mut s = Set::from_values(vec![1, 1, 2]);
        assert_eq!(s.len(), 2);
        s.insert(2);
        s.insert_all(vec![3, 3, 4]);
        assert_eq!(s.len(), 4);
        s.remove(&9);
        s.remove_all(&[1, 1, 3]);
        assert_eq!(s, Set::from_values(vec![2, 4]));
        assert!(s.has_items());
        s.clear();
        assert!(!s.has_items());
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_random_algebra() {
        for _ in 0..50 {
            let a = random_set(random::<usize>() % 32);
            let b = random_set(random::<usize>() % 32);

            let u = a.union(&b);
            assert!(u.len() >= a.len().max(b.len()));
            assert!(a.subset_of(&u) && b.subset_of(&u));

            let i = a.intersection(&b);
            assert!(i.subset_of(&a) && i.subset_of(&b));

            let d = a.difference(&b);
            assert!(d.iter().all(|k| !b.has(k)));
            assert!(d.subset_of(&a));
            assert_eq!(d.len() + i.len(), a.len());

            assert!(a.subset_of(&a));
            assert!(!a.proper_subset_of(&a));

            let mut r = a.clone();
            r.remove_set(&b);
            assert_eq!(r, d);
        }
    }

    #[test]
    fn test_subset() {
        let small = Set::from_values(vec![1, 2]);
        let large = Set::from_values(vec![1, 2, 3]);
        let other = Set::from_values(vec![1, 5, 6]);
        assert!(small.subset_of(&large));
        assert!(small.proper_subset_of(&large));
        assert!(!large.subset_of(&small));
        assert!(!small.subset_of(&other));
        assert!(Set::<i32>::new().proper_subset_of(&small));
        assert!(!Set::<i32>::new().proper_subset_of(&Set::new()));
    }

    #[test]
    fn test_values_and_slice() {
        let s = Set::from_values(vec![3, 1, 2, 3]);
        let mut values = s.values();
        values.sort();
        assert_eq!(values, vec![1, 2, 3]);

        let mut slice = s.to_slice();
        slice.sort(|a, b| a.cmp(b));
        assert_eq!(slice.values(), &[1, 2, 3]);
    }

    #[test]
    fn test_for_each() {
        let s = Set::from_values(0u32..10);
        let mut total = 0;
        s.for_each(|v| total += v);
        assert_eq!(total, 45);

        let mut visited = 0;
        let res = s.try_for_each(|v| {
            visited += 1;
            if *v == 5 {
                Err(*v)
            } else {
                Ok(())
            }
        });
        assert_eq!(res, Err(5));
        assert!(visited <= s.len());
        assert_eq!(s.try_for_each::<(), _>(|_| Ok(())), Ok(()));
    }

    #[cfg(feature = "stream")]
    #[test]
    fn test_serialize() {
        let s = Set::from_values(vec![String::from("x"), String::from("y")]);
        let bytes = bincode::serialize(&s).unwrap();
        let d: Set<String> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(d, s);
    }
}
