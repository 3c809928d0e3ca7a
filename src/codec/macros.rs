use super::FloatCodec;
use crate::options::ByteOrder;

// Floats go through their unsigned bit pattern of the same width.
macro_rules! impl_float_codec {
    ($($float:ty => $bits:ty, $size:literal);+ $(;)?) => {
        $(
            impl FloatCodec<$size> for $float {
                #[inline]
                fn encode(self, order: ByteOrder) -> [u8; $size] {
                    let bits = self.to_bits();
                    match order {
                        ByteOrder::BigEndian => bits.to_be_bytes(),
                        ByteOrder::LittleEndian => bits.to_le_bytes(),
                    }
                }

                #[inline]
                fn decode_group(group: &[u8; $size], order: ByteOrder) -> Self {
                    let bits = match order {
                        ByteOrder::BigEndian => <$bits>::from_be_bytes(*group),
                        ByteOrder::LittleEndian => <$bits>::from_le_bytes(*group),
                    };
                    <$float>::from_bits(bits)
                }
            }
        )+
    };
}

impl_float_codec!(f32 => u32, 4; f64 => u64, 8);
