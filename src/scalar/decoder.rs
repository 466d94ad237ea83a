/// Byte order of every multi-byte field in a net-bin file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

/// net-bin files are raw little-endian memory dumps.
pub const BYTE_ORDER: ByteOrder = ByteOrder::Little;

/// Interprets a 4-byte span as an unsigned 32-bit count.
pub fn as_unsigned_int(span: [u8; 4]) -> u32 {
    match BYTE_ORDER {
        ByteOrder::Little => u32::from_le_bytes(span),
        ByteOrder::Big => u32::from_be_bytes(span),
    }
}

/// Interprets an 8-byte span as an unsigned 64-bit count.
pub fn as_unsigned_long(span: [u8; 8]) -> u64 {
    match BYTE_ORDER {
        ByteOrder::Little => u64::from_le_bytes(span),
        ByteOrder::Big => u64::from_be_bytes(span),
    }
}

/// Decodes a 4-byte span holding a single-precision bit pattern.
///
/// Computes `sign * m * 2^(e - 150)` where `e` is the 8-bit exponent field
/// and `m` the mantissa with the implicit leading bit set (or, for `e == 0`,
/// the raw mantissa shifted left by one). Matches `f32::from_bits` for every
/// exponent below 255. Exponent 255 is not special-cased: infinity and NaN
/// patterns come out as large finite values.
pub fn as_float32(span: [u8; 4]) -> f64 {
    float_from_bits(as_unsigned_int(span))
}

pub(crate) fn float_from_bits(bits: u32) -> f64 {
    let sign = if bits >> 31 == 0 { 1.0 } else { -1.0 };
    let e = ((bits >> 23) & 0xff) as i32;
    let m = if e == 0 {
        (bits & 0x7f_ffff) << 1
    } else {
        (bits & 0x7f_ffff) | 0x80_0000
    };
    sign * m as f64 * 2f64.powi(e - 150)
}

/// Inverse of `as_unsigned_int`, used by the encoder.
pub(crate) fn unsigned_int_bytes(v: u32) -> [u8; 4] {
    match BYTE_ORDER {
        ByteOrder::Little => v.to_le_bytes(),
        ByteOrder::Big => v.to_be_bytes(),
    }
}

pub(crate) fn unsigned_long_bytes(v: u64) -> [u8; 8] {
    match BYTE_ORDER {
        ByteOrder::Little => v.to_le_bytes(),
        ByteOrder::Big => v.to_be_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decode(bits: u32) -> f64 {
        as_float32(unsigned_int_bytes(bits))
    }

    #[test]
    fn reads_little_endian_counts() {
        assert_eq!(as_unsigned_int([0x02, 0x00, 0x00, 0x00]), 2);
        assert_eq!(as_unsigned_int([0x00, 0x01, 0x00, 0x00]), 256);
        assert_eq!(as_unsigned_long([1, 0, 0, 0, 1, 0, 0, 0]), (1 << 32) + 1);
    }

    #[test]
    fn decodes_reference_patterns() {
        assert_eq!(decode(0x0000_0000).to_bits(), 0.0f64.to_bits());
        assert_eq!(decode(0x8000_0000).to_bits(), (-0.0f64).to_bits());
        assert_eq!(decode(0x3F80_0000), 1.0);
        assert_eq!(decode(0xBF80_0000), -1.0);
        assert_eq!(decode(0x7F7F_FFFF), f32::MAX as f64);
        assert_eq!(decode(0x4000_0000), 2.0);
        assert_eq!(decode(0x4040_0000), 3.0);
    }

    #[test]
    fn smallest_subnormal() {
        assert_eq!(decode(0x0000_0001), 2f64.powi(-149));
        assert_eq!(decode(0x0000_0001), f32::from_bits(1) as f64);
    }

    #[test]
    fn max_exponent_stays_finite() {
        // 0x7F800000 is +inf as an IEEE single; here it is 2^128.
        let v = decode(0x7F80_0000);
        assert!(v.is_finite());
        assert_eq!(v, 2f64.powi(128));
        assert!(decode(0xFFC0_0000).is_finite());
        assert!(decode(0xFFC0_0000) < 0.0);
    }

    proptest! {
        /// Agrees bit-for-bit with the IEEE single decode for exponents 0..=254.
        #[test]
        fn prop_matches_ieee_single(bits in any::<u32>()) {
            prop_assume!((bits >> 23) & 0xff != 0xff);
            let expected = f32::from_bits(bits) as f64;
            prop_assert_eq!(decode(bits).to_bits(), expected.to_bits());
        }
    }
}
