#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pair of values of independent types.
///
/// ## Examples
///
/// ```
/// use tidbits::Tuple;
///
/// let mut t = Tuple::new(1, "x");
/// assert_eq!((*t.get1(), *t.get2()), (1, "x"));
/// t.set(2, "y");
/// assert_eq!((*t.get1(), *t.get2()), (2, "y"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuple<T1, T2> {
    first: T1,
    second: T2,
}

impl<T1, T2> Tuple<T1, T2> {
    /// Create a tuple from its two values.
    pub fn new(first: T1, second: T2) -> Self {
        Tuple { first, second }
    }

    /// Overwrite both values at once.
    pub fn set(&mut self, first: T1, second: T2) {
        self.first = first;
        self.second = second;
    }

    /// First value.
    pub fn get1(&self) -> &T1 {
        &self.first
    }

    /// Second value.
    pub fn get2(&self) -> &T2 {
        &self.second
    }

    /// Mutable access to the first value.
    pub fn get1_mut(&mut self) -> &mut T1 {
        &mut self.first
    }

    /// Mutable access to the second value.
    pub fn get2_mut(&mut self) -> &mut T2 {
        &mut self.second
    }

    /// Unwrap into a native `(first, second)` pair.
    pub fn into_inner(self) -> (T1, T2) {
        (self.first, self.second)
    }
}

impl<T1, T2> From<(T1, T2)> for Tuple<T1, T2> {
    fn from((first, second): (T1, T2)) -> Self {
        Tuple::new(first, second)
    }
}

impl<T1, T2> From<Tuple<T1, T2>> for (T1, T2) {
    fn from(tuple: Tuple<T1, T2>) -> Self {
        tuple.into_inner()
    }
}
