use crate::constants::{MAX_FRACTION_DIGITS, POW10};
use crate::itoa::decimal_length;

/// Fraction digits of a float, rounded and stripped of trailing zeros.
///
/// `value` holds the digits as an integer; `len` is how many places they take
/// after the decimal point, so `0.0012` is `{ value: 12, len: 4 }`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(super) struct Fraction {
    pub(super) value: u64,
    pub(super) len: usize,
    /// Rounding overflowed into the integer part.
    pub(super) carry: bool,
}

impl Fraction {
    /// Extracts the digits of `remainder` (in `[0, 1)`) that follow `whole`.
    ///
    /// Without integer digits 17 places are kept, otherwise 16 minus the
    /// integer digit count; a non-zero `precision` lowers that further. The
    /// last kept digit is rounded half up.
    pub(super) fn extract(remainder: f64, whole: u64, precision: usize) -> Fraction {
        if remainder == 0.0 {
            return Fraction::default();
        }

        let limit = if whole == 0 {
            MAX_FRACTION_DIGITS
        } else {
            (MAX_FRACTION_DIGITS - 1).saturating_sub(decimal_length(whole))
        };

        let mut len = if precision == 0 || precision > limit {
            limit
        } else {
            precision
        };

        // one extra digit to round on
        let scaled = (remainder * POW10[len + 1] as f64) as u64;
        let mut value = scaled / 10;
        if scaled % 10 >= 5 {
            value += 1;
        }

        if value == POW10[len] {
            return Fraction {
                value: 0,
                len: 0,
                carry: true,
            };
        }

        while len != 0 && value % 10 == 0 {
            value /= 10;
            len -= 1;
        }

        Fraction {
            value,
            len,
            carry: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_trailing_zeros() {
        let fraction = Fraction::extract(0.5, 1, 0);
        assert_eq!(fraction, Fraction { value: 5, len: 1, carry: false });
    }

    #[test]
    fn test_extract_keeps_leading_zeros() {
        let fraction = Fraction::extract(0.00123, 0, 0);
        assert_eq!(fraction, Fraction { value: 123, len: 5, carry: false });
    }

    #[test]
    fn test_extract_rounds_half_up() {
        let fraction = Fraction::extract(0.125, 7, 2);
        assert_eq!(fraction, Fraction { value: 13, len: 2, carry: false });
    }

    #[test]
    fn test_extract_carries_into_whole() {
        let fraction = Fraction::extract(0.999, 0, 2);
        assert!(fraction.carry);
        assert_eq!(fraction.len, 0);
    }

    #[test]
    fn test_extract_without_room_rounds_whole() {
        // 16 integer digits leave no fraction place
        let fraction = Fraction::extract(0.75, 1_000_000_000_000_000, 0);
        assert_eq!(fraction, Fraction { value: 0, len: 0, carry: true });

        let fraction = Fraction::extract(0.25, 1_000_000_000_000_000, 0);
        assert_eq!(fraction, Fraction::default());
    }
}
