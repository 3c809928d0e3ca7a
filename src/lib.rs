//! Fixed-width conversion between floats and bytes with a selectable byte
//! order.
//!
//! Scalars encode to `[u8; 4]` or `[u8; 8]`. Sequences encode to one flat
//! buffer with no length prefix, type tag or padding, and decode back by
//! splitting that buffer into equal groups.
//!
//! # Example
//!
//! ```
//! use floatcast::{EncodingOptions, bytes_to_f64, bytes_to_f64s, f64_to_bytes, f64s_to_bytes};
//!
//! let bytes = f64_to_bytes(-561.2863, None);
//! assert_eq!(bytes, [0xc0, 0x81, 0x8a, 0x4a, 0x57, 0xa7, 0x86, 0xc2]);
//! assert_eq!(bytes_to_f64(&bytes, None).unwrap(), -561.2863);
//!
//! let le = EncodingOptions::little_endian();
//! let flat = f64s_to_bytes(&[0.5, 1.5, 2.5], Some(&le));
//! assert_eq!(flat.len(), 24);
//! assert_eq!(bytes_to_f64s(&flat, Some(&le)).unwrap(), [0.5, 1.5, 2.5]);
//! ```
//!
//! # Byte groups
//!
//! ```
//! use floatcast::{CodecError, GroupSize, flatten, unflatten32};
//!
//! let flat = flatten(&[vec![1u8, 2, 3, 4], vec![5, 6, 7, 8]], GroupSize::Four).unwrap();
//! assert_eq!(unflatten32(&flat).unwrap(), [[1, 2, 3, 4], [5, 6, 7, 8]]);
//!
//! let err = flatten(&[vec![1u8, 2, 3, 4, 5]], GroupSize::Four).unwrap_err();
//! assert_eq!(err, CodecError::ShapeMismatch { expected: 4, actual: 5, index: 0 });
//! ```
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod codec;
mod error;
mod flatten;
mod options;
mod sequence;

pub use codec::{FloatCodec, bytes_to_f32, bytes_to_f64, f32_to_bytes, f64_to_bytes};
pub use error::{CodecError, Result};
pub use flatten::{
    GroupSize, flatten, flatten_groups, flatten32, flatten64, unflatten, unflatten_groups,
    unflatten32, unflatten64,
};
pub use options::{ByteOrder, EncodingOptions};
pub use sequence::{
    bytes_to_f32s, bytes_to_f64s, decode_seq, encode_seq, f32s_to_bytes, f64s_to_bytes,
    int_to_f32,
};

#[cfg(test)]
mod tests;
