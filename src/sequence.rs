//! Float sequences to and from flat buffers.
//!
//! Encoding turns each value into one fixed-size group and flattens the
//! groups. Decoding unflattens first, so a buffer that is not a whole number
//! of groups is rejected before any value is read.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::codec::FloatCodec;
use crate::error::Result;
use crate::flatten::{flatten_groups, unflatten_groups};
use crate::options::{ByteOrder, EncodingOptions};

/// Encode `values` in order into one buffer of `values.len() * N` bytes.
#[must_use]
pub fn encode_seq<T, const N: usize>(values: &[T], order: ByteOrder) -> Vec<u8>
where
    T: FloatCodec<N>,
{
    let groups: Vec<[u8; N]> = values.iter().map(|value| value.encode(order)).collect();
    trace!("encoded {} values of {N} bytes ({order})", groups.len());
    flatten_groups(&groups)
}

/// Decode a buffer of `N`-byte groups into values, in buffer order.
///
/// Fails with [`CodecError::MisalignedLength`](crate::CodecError::MisalignedLength)
/// when `buf.len()` is not a multiple of `N`.
pub fn decode_seq<T, const N: usize>(buf: &[u8], order: ByteOrder) -> Result<Vec<T>>
where
    T: FloatCodec<N>,
{
    let groups = unflatten_groups::<N>(buf)
        .inspect_err(|err| debug!("sequence decode failed: {err}"))?;
    let values: Vec<T> = groups
        .iter()
        .map(|group| T::decode_group(group, order))
        .collect();
    trace!("decoded {} values of {N} bytes ({order})", values.len());
    Ok(values)
}

/// Encode a slice of `f32` into `4 * values.len()` bytes.
///
/// ```
/// use floatcast::{bytes_to_f32s, f32s_to_bytes};
///
/// let bytes = f32s_to_bytes(&[1.0, -2.5], None);
/// assert_eq!(bytes, [0x3f, 0x80, 0x00, 0x00, 0xc0, 0x20, 0x00, 0x00]);
/// assert_eq!(bytes_to_f32s(&bytes, None).unwrap(), [1.0, -2.5]);
/// ```
#[must_use]
pub fn f32s_to_bytes(values: &[f32], options: Option<&EncodingOptions>) -> Vec<u8> {
    encode_seq::<f32, 4>(values, EncodingOptions::resolve(options))
}

/// Decode a buffer of 4-byte groups into `f32` values.
pub fn bytes_to_f32s(buf: &[u8], options: Option<&EncodingOptions>) -> Result<Vec<f32>> {
    decode_seq::<f32, 4>(buf, EncodingOptions::resolve(options))
}

/// Encode a slice of `f64` into `8 * values.len()` bytes.
#[must_use]
pub fn f64s_to_bytes(values: &[f64], options: Option<&EncodingOptions>) -> Vec<u8> {
    encode_seq::<f64, 8>(values, EncodingOptions::resolve(options))
}

/// Decode a buffer of 8-byte groups into `f64` values.
pub fn bytes_to_f64s(buf: &[u8], options: Option<&EncodingOptions>) -> Result<Vec<f64>> {
    decode_seq::<f64, 8>(buf, EncodingOptions::resolve(options))
}

/// Nearest `f32` to an integer. Large magnitudes lose precision.
#[inline]
#[must_use]
pub fn int_to_f32(value: i64) -> f32 {
    value as f32
}
