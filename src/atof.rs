mod exponent;
mod mantissa;

use crate::sign::{split_sign, Sign};
use crate::{Error, ErrorKind};

/// Parses decimal text, optionally with an `e`/`E` exponent, into an f64.
pub(crate) fn parse_f64(text: &[u8]) -> Result<f64, Error> {
    let (sign, digits) = split_sign(text)?;

    // `0` alone or `0.` followed by the fraction
    if digits.len() > 1 && digits[0] == b'0' && digits[1] != b'.' {
        return Err(Error::new(ErrorKind::LeadingZero));
    }

    let (mantissa, exponent) = exponent::split_exponent(digits)?;
    let number = mantissa::parse_mantissa(mantissa, exponent)?;

    Ok(match sign {
        Sign::Positive => number,
        Sign::Negative => -number,
    })
}
