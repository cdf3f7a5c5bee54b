use crate::num::{max, min};
#[cfg(feature = "stream")]
use crate::stream::{
    read_item, write_item, StreamResult, DEFAULT_READ_LIMIT,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Running tracker of the minimum, current and maximum of a stream of
/// values.
///
/// A [`MinMax`] is seeded with an initial value, then fed with
/// [`update()`](struct.MinMax.html#method.update). After every update,
/// every value seen so far, including the initial one, lies between
/// [`minimum()`](struct.MinMax.html#method.minimum) and
/// [`maximum()`](struct.MinMax.html#method.maximum), and
/// [`current()`](struct.MinMax.html#method.current) is the last value
/// supplied.
///
/// ## Examples
///
/// ```
/// use tidbits::MinMax;
///
/// let mut latency = MinMax::new(10);
/// latency.update(3);
/// assert_eq!((*latency.minimum(), *latency.current(), *latency.maximum()),
///            (3, 3, 10));
/// latency.update(15);
/// assert_eq!((*latency.minimum(), *latency.current(), *latency.maximum()),
///            (3, 15, 15));
/// ```
///
/// The tracker is not synchronized. Sharing it for mutation between
/// threads requires an external lock.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MinMax<T> {
    min: T,
    cur: T,
    max: T,
}

impl<T: PartialOrd + Clone> MinMax<T> {
    /// Create a tracker with `value` as minimum, current and maximum.
    pub fn new(value: T) -> Self {
        MinMax {
            min: value.clone(),
            cur: value.clone(),
            max: value,
        }
    }

    /// Record a new value.
    pub fn update(&mut self, value: T) {
        self.min = min(self.min.clone(), value.clone());
        self.max = max(self.max.clone(), value.clone());
        self.cur = value;
    }

    /// Smallest value seen so far.
    pub fn minimum(&self) -> &T {
        &self.min
    }

    /// Last value seen.
    pub fn current(&self) -> &T {
        &self.cur
    }

    /// Largest value seen so far.
    pub fn maximum(&self) -> &T {
        &self.max
    }

    /// Export the tracker state keyed by `"min"`, `"cur"` and `"max"`.
    pub fn to_map(&self) -> BTreeMap<&'static str, T> {
        let mut map = BTreeMap::new();
        map.insert("min", self.min.clone());
        map.insert("cur", self.cur.clone());
        map.insert("max", self.max.clone());
        map
    }
}

impl<T: Default> MinMax<T> {
    /// Set minimum, current and maximum back to `T::default()`.
    ///
    /// The default value is a regular state: the next
    /// [`update()`](struct.MinMax.html#method.update) compares against
    /// it like against any other value.
    pub fn reset(&mut self) {
        self.min = T::default();
        self.cur = T::default();
        self.max = T::default();
    }
}

impl<T: fmt::Display> fmt::Display for MinMax<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.min, self.cur, self.max)
    }
}

//-------------------------------------------------------------------------
//  Byte stream round-trip.
//-------------------------------------------------------------------------

#[cfg(feature = "stream")]
impl<T> MinMax<T>
where
    T: Serialize + serde::de::DeserializeOwned,
{
    /// Write minimum, current and maximum, in that order, to `stream`.
    pub fn write_to<W: std::io::Write>(
        &self,
        stream: &mut W,
    ) -> StreamResult<()> {
        write_item(stream, &self.min)?;
        write_item(stream, &self.cur)?;
        write_item(stream, &self.max)
    }

    /// Read minimum, current and maximum, in that order, from `stream`.
    ///
    /// Each field may use up to
    /// [`DEFAULT_READ_LIMIT`](crate::stream::DEFAULT_READ_LIMIT)
    /// bytes. See
    /// [`read_from_with_limit()`](struct.MinMax.html#method.read_from_with_limit).
    pub fn read_from<R: std::io::Read>(
        &mut self,
        stream: &mut R,
    ) -> StreamResult<()> {
        self.read_from_with_limit(stream, DEFAULT_READ_LIMIT)
    }

    /// Read minimum, current and maximum, in that order, from `stream`,
    /// consuming at most `limit` bytes per field.
    ///
    /// The three fields are decoded before any of them is stored.
    /// If decoding fails, this tracker is left unchanged.
    pub fn read_from_with_limit<R: std::io::Read>(
        &mut self,
        stream: &mut R,
        limit: u64,
    ) -> StreamResult<()> {
        let min = read_item(stream, limit)?;
        let cur = read_item(stream, limit)?;
        let max = read_item(stream, limit)?;
        self.min = min;
        self.cur = cur;
        self.max = max;
        Ok(())
    }

    /// Encode this tracker into a vector of bytes.
    pub fn to_bytes(&self) -> StreamResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Overwrite this tracker with the state encoded in `bytes`.
    pub fn decode(&mut self, bytes: &[u8]) -> StreamResult<()> {
        let mut stream = bytes;
        self.read_from_with_limit(&mut stream, bytes.len() as u64)
    }

    /// Build a tracker from bytes produced by
    /// [`to_bytes()`](struct.MinMax.html#method.to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> StreamResult<Self> {
        let limit = bytes.len() as u64;
        let mut stream = bytes;
        Ok(MinMax {
            min: read_item(&mut stream, limit)?,
            cur: read_item(&mut stream, limit)?,
            max: read_item(&mut stream, limit)?,
        })
    }
}

/// Format a [`MinMax`](struct.MinMax.html) with a `format!` template.
///
/// The minimum, current and maximum are the first three positional
/// arguments of the template. Extra arguments follow them.
///
/// The template must be a string literal, as for `format!`: templates
/// built at runtime are not supported.
///
/// ```
/// use tidbits::{minmax_format, MinMax};
///
/// let mut t = MinMax::new(2);
/// t.update(7);
/// assert_eq!(minmax_format!(t, "{} < {} <= {}"), "2 < 7 <= 7");
/// assert_eq!(minmax_format!(t, "[{}, {}, {}] {}ms", "rtt"),
///            "[2, 7, 7] rttms");
/// ```
///
/// ```compile_fail
/// use tidbits::{minmax_format, MinMax};
///
/// let template = String::from("{} {} {}");
/// minmax_format!(MinMax::new(1), template);
/// ```
#[macro_export]
macro_rules! minmax_format {
    ($minmax:expr, $template:literal $(, $arg:expr)* $(,)?) => {{
        let minmax = &$minmax;
        format!(
            $template,
            minmax.minimum(),
            minmax.current(),
            minmax.maximum()
            $(, $arg)*
        )
    }};
}
