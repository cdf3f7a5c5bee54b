//! Errors of the byte stream round-trip.
//!
//! Containers supporting a conversion to a stream of bytes encode their
//! fields with [`bincode`]. Failures of the encoder or decoder are
//! reported as a [`StreamError`].

use bincode::Options;
use thiserror::Error;

/// Maximum number of bytes read to decode one value from a stream when
/// the caller does not provide a limit.
///
/// Length prefixes announcing more bytes than the limit fail with
/// [`StreamError::Deserialize`] before anything is allocated.
pub const DEFAULT_READ_LIMIT: u64 = 1 << 24;

#[derive(Debug, Error)]
pub enum StreamError {
    /// Error returned by call to `serialize_into()` from
    /// `bincode::Options::serialize_into()`.
    #[error("failed to serialize into stream: {0}")]
    Serialize(#[source] bincode::Error),
    /// Error returned by call to `deserialize_from()` from
    /// `bincode::Options::deserialize_from()`, including values larger
    /// than the read limit.
    #[error("failed to deserialize from stream: {0}")]
    Deserialize(#[source] bincode::Error),
}

/// Result type of byte stream conversions.
/// See [`StreamError`](enum.StreamError.html).
pub type StreamResult<T> = Result<T, StreamError>;

/// Write one value at the current position of `stream`.
pub(crate) fn write_item<W, T>(stream: &mut W, item: &T) -> StreamResult<()>
where
    W: std::io::Write,
    T: serde::Serialize,
{
    options()
        .serialize_into(stream, item)
        .map_err(StreamError::Serialize)
}

/// Read one value at the current position of `stream`, consuming at
/// most `limit` bytes.
pub(crate) fn read_item<R, T>(stream: &mut R, limit: u64) -> StreamResult<T>
where
    R: std::io::Read,
    T: serde::de::DeserializeOwned,
{
    options()
        .with_limit(limit)
        .deserialize_from(stream)
        .map_err(StreamError::Deserialize)
}

/// Fixed width integers and no trailing bytes check, the encoding of
/// `bincode::serialize()`.
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}
