//! Single-value float encoding.
//!
//! Encoding writes the IEEE-754 bit pattern in the requested byte order and
//! cannot fail. Decoding reads the leading `N` bytes and ignores the rest;
//! a shorter buffer is rejected rather than padded.

mod macros;

use snafu::OptionExt;

use crate::error::{InsufficientLengthSnafu, Result};
use crate::options::{ByteOrder, EncodingOptions};

/// Bit-exact conversion between a float and its `N`-byte encoding.
///
/// Implemented for `f32` (`N = 4`) and `f64` (`N = 8`). NaN payloads, signed
/// zeros and infinities pass through unchanged.
pub trait FloatCodec<const N: usize>: Copy + Sized {
    /// Encode into exactly `N` bytes.
    fn encode(self, order: ByteOrder) -> [u8; N];

    /// Decode one group that is already exactly `N` bytes.
    fn decode_group(group: &[u8; N], order: ByteOrder) -> Self;

    /// Decode from the first `N` bytes of `buf`.
    ///
    /// Trailing bytes are ignored.
    #[inline]
    fn decode(buf: &[u8], order: ByteOrder) -> Result<Self> {
        let group = buf.first_chunk::<N>().context(InsufficientLengthSnafu {
            needed: N,
            available: buf.len(),
        })?;
        Ok(Self::decode_group(group, order))
    }

    /// Encode into the front of a caller-provided buffer.
    ///
    /// Returns the number of bytes written.
    #[inline]
    fn encode_into(self, buf: &mut [u8], order: ByteOrder) -> Result<usize> {
        let available = buf.len();
        let dst = buf
            .first_chunk_mut::<N>()
            .context(InsufficientLengthSnafu {
                needed: N,
                available,
            })?;
        *dst = self.encode(order);
        Ok(N)
    }
}

/// Encode an `f32` as 4 bytes.
///
/// ```
/// use floatcast::{EncodingOptions, f32_to_bytes};
///
/// assert_eq!(f32_to_bytes(-561.2863, None), [0xc4, 0x0c, 0x52, 0x53]);
/// assert_eq!(
///     f32_to_bytes(-561.2863, Some(&EncodingOptions::little_endian())),
///     [0x53, 0x52, 0x0c, 0xc4]
/// );
/// ```
#[must_use]
pub fn f32_to_bytes(value: f32, options: Option<&EncodingOptions>) -> [u8; 4] {
    <f32 as FloatCodec<4>>::encode(value, EncodingOptions::resolve(options))
}

/// Decode an `f32` from the first 4 bytes of `buf`.
///
/// Fails with [`CodecError::InsufficientLength`](crate::CodecError::InsufficientLength)
/// if `buf` is shorter than 4 bytes.
pub fn bytes_to_f32(buf: &[u8], options: Option<&EncodingOptions>) -> Result<f32> {
    <f32 as FloatCodec<4>>::decode(buf, EncodingOptions::resolve(options))
}

/// Encode an `f64` as 8 bytes.
#[must_use]
pub fn f64_to_bytes(value: f64, options: Option<&EncodingOptions>) -> [u8; 8] {
    <f64 as FloatCodec<8>>::encode(value, EncodingOptions::resolve(options))
}

/// Decode an `f64` from the first 8 bytes of `buf`.
///
/// Fails with [`CodecError::InsufficientLength`](crate::CodecError::InsufficientLength)
/// if `buf` is shorter than 8 bytes.
pub fn bytes_to_f64(buf: &[u8], options: Option<&EncodingOptions>) -> Result<f64> {
    <f64 as FloatCodec<8>>::decode(buf, EncodingOptions::resolve(options))
}
