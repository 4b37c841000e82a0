use crate::sign::{split_sign, Sign};
use crate::{Error, ErrorKind};

/// An integer that can be parsed from decimal text.
///
/// This trait is sealed and cannot be implemented for types outside of this crate.
pub trait ParseInteger: crate::sealed::Sealed + Copy + Default {
    #[doc(hidden)]
    fn parse_text(text: &[u8]) -> Result<Self, Error>;
}

/// Accumulates unsigned decimal digits, most significant first.
fn parse_magnitude(digits: &[u8]) -> Result<u64, Error> {
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(Error::new(ErrorKind::LeadingZero));
    }

    digits.iter().try_fold(0u64, |acc, &c| {
        if !c.is_ascii_digit() {
            return Err(Error::new(ErrorKind::InvalidDigit(c)));
        }

        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(c - b'0')))
            .ok_or_else(|| Error::new(ErrorKind::Overflow))
    })
}

macro_rules! impl_ParseInteger {
    (signed: $($t:ident),*) => {$(
        impl ParseInteger for $t {
            fn parse_text(text: &[u8]) -> Result<$t, Error> {
                let (sign, digits) = split_sign(text)?;
                let magnitude = i128::from(parse_magnitude(digits)?);
                let value = match sign {
                    Sign::Positive => magnitude,
                    Sign::Negative => -magnitude,
                };

                $t::try_from(value).map_err(|_| Error::new(ErrorKind::Overflow))
            }
        }
    )*};
    (unsigned: $($t:ident),*) => {$(
        impl ParseInteger for $t {
            fn parse_text(text: &[u8]) -> Result<$t, Error> {
                let (sign, digits) = split_sign(text)?;
                if sign == Sign::Negative {
                    return Err(Error::new(ErrorKind::UnexpectedSign));
                }

                $t::try_from(parse_magnitude(digits)?).map_err(|_| Error::new(ErrorKind::Overflow))
            }
        }
    )*};
}

impl_ParseInteger!(signed: i8, i16, i32, i64, isize);
impl_ParseInteger!(unsigned: u8, u16, u32, u64, usize);
