//! Generic arithmetic and ordering helpers.
//!
//! Arithmetic helpers accept any integer or floating point type
//! implementing [`num_traits::Num`]. Ordering helpers accept any type
//! implementing [`PartialOrd`] such as integers, floats or strings.
//!
//! ```
//! use tidbits::num::{between_inclusive, max, max_value, sum};
//!
//! assert_eq!(sum(2, 3), 5);
//! assert_eq!(max("a", "b"), "b");
//! assert_eq!(max_value(&[4.0, 9.5, 1.0]), 9.5);
//! assert!(between_inclusive(1, 3, 3));
//! ```

use num_traits::Num;

/// Return `a + b`.
pub fn sum<T: Num>(a: T, b: T) -> T {
    a + b
}

/// Return `a - b`. Same as [`sub()`].
pub fn diff<T: Num>(a: T, b: T) -> T {
    a - b
}

/// Return `a - b`.
pub fn sub<T: Num>(a: T, b: T) -> T {
    a - b
}

/// Return `a / b`.
///
/// No check is performed on `b`: integer division by zero panics the
/// same way the `/` operator does.
pub fn div<T: Num>(a: T, b: T) -> T {
    a / b
}

/// Return `a * b`.
pub fn mult<T: Num>(a: T, b: T) -> T {
    a * b
}

/// Return the larger of `a` and `b`.
///
/// If `a` and `b` are equal, or cannot be compared (`NaN`), `a` is
/// returned.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

/// Return the smaller of `a` and `b`.
///
/// If `a` and `b` are equal, or cannot be compared (`NaN`), `a` is
/// returned.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        b
    } else {
        a
    }
}

/// Return the largest value of a slice.
///
/// ## Panics
///
/// The slice must not be empty.
pub fn max_value<T: PartialOrd + Clone>(values: &[T]) -> T {
    let mut m = &values[0];
    for v in values.iter() {
        if m < v {
            m = v;
        }
    }
    m.clone()
}

/// Return the smallest value of a slice.
///
/// ## Panics
///
/// The slice must not be empty.
pub fn min_value<T: PartialOrd + Clone>(values: &[T]) -> T {
    let mut m = &values[0];
    for v in values.iter() {
        if m > v {
            m = v;
        }
    }
    m.clone()
}

/// Check whether `min <= val <= max`.
pub fn between_inclusive<T: PartialOrd>(min: T, max: T, val: T) -> bool {
    min <= val && val <= max
}

/// Check whether `min < val < max`.
pub fn between_exclusive<T: PartialOrd>(min: T, max: T, val: T) -> bool {
    min < val && val < max
}
