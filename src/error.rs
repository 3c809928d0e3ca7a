//! Error types for float and byte-group conversion.

use snafu::Snafu;

/// Error during flatten, unflatten or float decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CodecError {
    /// A group handed to flatten does not have the required size.
    #[snafu(display(
        "expected groups of {expected} bytes, but group {index} has {actual} bytes"
    ))]
    ShapeMismatch {
        /// Required group size.
        expected: usize,
        /// Size of the first offending group.
        actual: usize,
        /// Position of the offending group in the input.
        index: usize,
    },

    /// A buffer handed to unflatten is not a whole number of groups.
    #[snafu(display(
        "expected the buffer length to be a multiple of {size}, but its length is {len}"
    ))]
    MisalignedLength {
        /// Required group size.
        size: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// Fewer bytes than one encoded value.
    #[snafu(display("needed {needed} bytes, only {available} available"))]
    InsufficientLength {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },
}

/// Result type for conversion operations.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
