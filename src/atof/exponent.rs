use crate::constants::EXPONENT_MAX_LEN;
use crate::{Error, ErrorKind};

/// Splits a trailing exponent off `text`, returning the mantissa text and the
/// exponent value.
///
/// Only the last five characters are searched, which bounds the suffix to an
/// optional sign and up to four digits. A decimal point ends the search. The
/// first character is never taken as the marker, so a mantissa always remains.
pub(super) fn split_exponent(text: &[u8]) -> Result<(&[u8], i32), Error> {
    for pos in (1..text.len()).rev().take(EXPONENT_MAX_LEN) {
        match text[pos] {
            b'0'..=b'9' => {}
            b'.' => break,
            b'e' | b'E' => return read_exponent(&text[..pos], false, &text[pos + 1..]),
            sign @ (b'+' | b'-') => {
                return match text[pos - 1] {
                    b'e' | b'E' => read_exponent(&text[..pos - 1], sign == b'-', &text[pos + 1..]),
                    _ => Err(Error::new(ErrorKind::InvalidDigit(sign))),
                };
            }
            c => return Err(Error::new(ErrorKind::InvalidDigit(c))),
        }
    }

    Ok((text, 0))
}

/// `digits` have already been checked by the scan in [`split_exponent`].
fn read_exponent<'a>(
    mantissa: &'a [u8],
    is_negative: bool,
    digits: &[u8],
) -> Result<(&'a [u8], i32), Error> {
    if digits.is_empty() {
        return Err(Error::new(ErrorKind::Exponent));
    }

    let magnitude = digits
        .iter()
        .fold(0i32, |acc, &c| acc * 10 + i32::from(c - b'0'));

    Ok((mantissa, if is_negative { -magnitude } else { magnitude }))
}
