// Widths of the decimal text of each integer type, without sign.
//
//  18446744073709551615   u64::MAX    20
//  -9223372036854775808   i64::MIN    19 + '-'
//  4294967295             u32::MAX    10
//  65535                  u16::MAX    5
pub(crate) const U8_MAX_LEN: usize = 3;
pub(crate) const U16_MAX_LEN: usize = 5;
pub(crate) const U32_MAX_LEN: usize = 10;
pub(crate) const U64_MAX_LEN: usize = 20;

/// Hex digits that fit into a `u64`.
pub(crate) const U64_HEX_LEN: usize = 16;

/// Whole-number digits accumulated into the `u64` mantissa when parsing.
pub(crate) const MAX_WHOLE_DIGITS: usize = 17;

/// Characters of a literal (dot included) that contribute to the parsed mantissa.
pub(crate) const MAX_MANTISSA_LEN: usize = 19;

/// Longest exponent suffix after the marker: `-` followed by four digits.
pub(crate) const EXPONENT_MAX_LEN: usize = 5;
pub(crate) const EXPONENT_MAX_DIGITS: usize = 4;

/// Fraction digits kept when no integer digit precedes the decimal point.
pub(crate) const MAX_FRACTION_DIGITS: usize = 17;

/// Fraction digits kept in scientific notation.
pub(crate) const SCIENTIFIC_PRECISION: usize = 15;

/// Magnitudes at or above this bound are written in scientific notation.
pub(crate) const SCIENTIFIC_UPPER: f64 = 1e19;

/// Non-zero magnitudes below this bound are written in scientific notation.
pub(crate) const SCIENTIFIC_LOWER: f64 = 1e-17;

pub(crate) const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_match_type_bounds() {
        assert_eq!(U8_MAX_LEN, u8::MAX.to_string().len());
        assert_eq!(U16_MAX_LEN, u16::MAX.to_string().len());
        assert_eq!(U32_MAX_LEN, u32::MAX.to_string().len());
        assert_eq!(U64_MAX_LEN, u64::MAX.to_string().len());
        assert!(i64::MIN.unsigned_abs().to_string().len() <= U64_MAX_LEN);
        assert!(i8::MIN.unsigned_abs().to_string().len() <= U8_MAX_LEN);
        assert_eq!(U64_HEX_LEN, format!("{:x}", u64::MAX).len());
    }

    #[test]
    fn test_pow10_table() {
        for (i, p) in POW10.iter().enumerate() {
            assert_eq!(*p, 10u64.pow(i as u32));
        }
    }
}
