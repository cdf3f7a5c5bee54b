//! Small generic containers removing boilerplate from everyday data
//! manipulation.
//!
//! * [`Slice`]: ordered, index addressable sequence with functional
//! helpers and default values on out of bounds reads.
//! * [`Set`]: unordered collection of unique values with set algebra.
//! * [`Tuple`]: pair of values of independent types.
//! * [`MinMax`]: running minimum, current and maximum of a stream of
//! values, convertible to and from bytes.
//! * [`num`]: generic arithmetic, min/max and range helpers.
//!
//! None of the containers is synchronized. Containers are `Send` and
//! `Sync` when their elements are, but mutation requires exclusive
//! access (`&mut`). Sharing a container for mutation between threads
//! requires an external lock owned by the caller.

pub mod num;

mod minmax;
pub use minmax::MinMax;

mod set;
pub use set::Set;

mod slice;
pub use slice::Slice;

mod tuple;
pub use tuple::Tuple;

#[cfg(feature = "stream")]
pub mod stream;

#[cfg(feature = "config")]
pub mod config;
