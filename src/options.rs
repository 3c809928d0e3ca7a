//! Byte order selection.

use core::fmt;

/// The ordering of bytes within an encoded value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the target this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    /// Whether the most significant byte comes first.
    #[inline]
    #[must_use]
    pub const fn is_big_endian(self) -> bool {
        matches!(self, Self::BigEndian)
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BigEndian => f.write_str("big-endian"),
            Self::LittleEndian => f.write_str("little-endian"),
        }
    }
}

/// Settings shared by every encode and decode call.
///
/// Passing `None` where an `Option<&EncodingOptions>` is accepted is the
/// same as passing the default, which is big-endian.
///
/// ```
/// use floatcast::{ByteOrder, EncodingOptions};
///
/// assert_eq!(EncodingOptions::default().byte_order, ByteOrder::BigEndian);
/// assert_eq!(
///     EncodingOptions::from(ByteOrder::LittleEndian),
///     EncodingOptions::little_endian()
/// );
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodingOptions {
    /// Byte order used for every multi-byte value.
    pub byte_order: ByteOrder,
}

impl EncodingOptions {
    /// Options with the given byte order.
    #[must_use]
    pub const fn new(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }

    /// Big-endian options.
    #[must_use]
    pub const fn big_endian() -> Self {
        Self::new(ByteOrder::BigEndian)
    }

    /// Little-endian options.
    #[must_use]
    pub const fn little_endian() -> Self {
        Self::new(ByteOrder::LittleEndian)
    }

    #[inline]
    pub(crate) fn resolve(options: Option<&Self>) -> ByteOrder {
        options.copied().unwrap_or_default().byte_order
    }
}

impl From<ByteOrder> for EncodingOptions {
    fn from(byte_order: ByteOrder) -> Self {
        Self::new(byte_order)
    }
}
