//! Packing fixed-size byte groups into one buffer and back.
//!
//! A flat buffer carries no framing: group `i`, byte `j` lives at offset
//! `i * size + j`. Unflatten only checks that the length is a whole number
//! of groups.

use alloc::vec::Vec;

use log::debug;
use zerocopy::{FromBytes, IntoBytes};

use crate::error::{CodecError, MisalignedLengthSnafu, Result, ShapeMismatchSnafu};

/// Width of one byte group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupSize {
    /// 4-byte groups, one `f32` each.
    Four,
    /// 8-byte groups, one `f64` each.
    Eight,
}

impl GroupSize {
    /// Number of bytes in one group.
    #[inline]
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// The group size with the given byte width, if there is one.
    #[must_use]
    pub const fn from_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            4 => Some(Self::Four),
            8 => Some(Self::Eight),
            _ => None,
        }
    }
}

/// Concatenate `groups` into one buffer, checking every group is `size` bytes.
///
/// Fails with [`CodecError::ShapeMismatch`] on the first group of the wrong
/// length.
///
/// ```
/// use floatcast::{GroupSize, flatten};
///
/// let flat = flatten(&[[1u8, 2, 3, 4], [5, 6, 7, 8]], GroupSize::Four).unwrap();
/// assert_eq!(flat, [1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn flatten<G: AsRef<[u8]>>(groups: &[G], size: GroupSize) -> Result<Vec<u8>> {
    let size = size.bytes();
    let mut flat = Vec::with_capacity(groups.len() * size);
    for (index, group) in groups.iter().enumerate() {
        let group = group.as_ref();
        if group.len() != size {
            debug!(
                "flatten rejected group {index}: {} bytes, expected {size}",
                group.len()
            );
            return ShapeMismatchSnafu {
                expected: size,
                actual: group.len(),
                index,
            }
            .fail();
        }
        flat.extend_from_slice(group);
    }
    Ok(flat)
}

/// [`flatten`] with 4-byte groups.
pub fn flatten32<G: AsRef<[u8]>>(groups: &[G]) -> Result<Vec<u8>> {
    flatten(groups, GroupSize::Four)
}

/// [`flatten`] with 8-byte groups.
pub fn flatten64<G: AsRef<[u8]>>(groups: &[G]) -> Result<Vec<u8>> {
    flatten(groups, GroupSize::Eight)
}

/// Concatenate groups whose size is fixed by their type. Cannot fail.
#[must_use]
pub fn flatten_groups<const N: usize>(groups: &[[u8; N]]) -> Vec<u8> {
    groups.as_bytes().to_vec()
}

/// Split `buf` into `size`-byte groups, borrowing from `buf`.
///
/// Fails with [`CodecError::MisalignedLength`] when `buf.len()` is not a
/// multiple of `size`. An empty buffer gives no groups.
///
/// ```
/// use floatcast::{GroupSize, unflatten};
///
/// let groups = unflatten(&[1, 2, 3, 4, 5, 6, 7, 8], GroupSize::Four).unwrap();
/// assert_eq!(groups, [&[1u8, 2, 3, 4][..], &[5, 6, 7, 8][..]]);
/// ```
pub fn unflatten(buf: &[u8], size: GroupSize) -> Result<Vec<&[u8]>> {
    let size = size.bytes();
    check_aligned(buf, size)?;
    Ok(buf.chunks_exact(size).collect())
}

/// Zero-copy view of `buf` as `[u8; 4]` groups.
pub fn unflatten32(buf: &[u8]) -> Result<&[[u8; 4]]> {
    unflatten_groups(buf)
}

/// Zero-copy view of `buf` as `[u8; 8]` groups.
pub fn unflatten64(buf: &[u8]) -> Result<&[[u8; 8]]> {
    unflatten_groups(buf)
}

/// Zero-copy view of `buf` as `N`-byte groups.
pub fn unflatten_groups<const N: usize>(buf: &[u8]) -> Result<&[[u8; N]]> {
    const { assert!(N > 0, "group size must be non-zero") };
    check_aligned(buf, N)?;
    <[[u8; N]]>::ref_from_bytes(buf).map_err(|_| CodecError::MisalignedLength {
        size: N,
        len: buf.len(),
    })
}

fn check_aligned(buf: &[u8], size: usize) -> Result<()> {
    if buf.len() % size != 0 {
        debug!(
            "unflatten rejected buffer of {} bytes, not a multiple of {size}",
            buf.len()
        );
        return MisalignedLengthSnafu {
            size,
            len: buf.len(),
        }
        .fail();
    }
    Ok(())
}
