use crate::constants::{MAX_MANTISSA_LEN, MAX_WHOLE_DIGITS};
use crate::{Error, ErrorKind};

/// Parses the digits and optional decimal point left of an exponent, then
/// scales the result by `exponent`.
///
/// The first 17 whole digits go into a `u64`; further whole digits only raise
/// the exponent. Fraction digits count while the literal is at most 19
/// characters long, later ones are checked and dropped.
pub(super) fn parse_mantissa(text: &[u8], mut exponent: i32) -> Result<f64, Error> {
    if text.is_empty() {
        return Err(Error::new(ErrorKind::MissingDigits));
    }

    let mut whole: u64 = 0;
    let mut point = None;

    for (pos, &c) in text.iter().enumerate() {
        match c {
            b'0'..=b'9' => {
                if pos < MAX_WHOLE_DIGITS {
                    whole = whole * 10 + u64::from(c - b'0');
                } else {
                    exponent = exponent.saturating_add(1);
                }
            }
            b'.' => {
                point = Some(pos);
                break;
            }
            _ => return Err(Error::new(ErrorKind::InvalidDigit(c))),
        }
    }

    let mut number = 0.0;

    if let Some(point) = point {
        let fraction = &text[point + 1..];
        if fraction.is_empty() {
            return Err(Error::new(ErrorKind::DanglingDecimal));
        }

        let mut base = 1.0;
        for (i, &c) in fraction.iter().enumerate() {
            if !c.is_ascii_digit() {
                return Err(Error::new(ErrorKind::InvalidDigit(c)));
            }

            if point < MAX_WHOLE_DIGITS && point + 1 + i < MAX_MANTISSA_LEN {
                base *= 10.0;
                number += f64::from(c - b'0') / base;
            }
        }
    }

    number += whole as f64;

    Ok(scale(number, exponent))
}

/// Multiplies or divides by ten `exponent` times, ten places per step while
/// more than nine remain.
fn scale(mut number: f64, exponent: i32) -> f64 {
    let is_negative = exponent < 0;
    let mut remaining = exponent.unsigned_abs();

    while remaining != 0 && number != 0.0 && number.is_finite() {
        let step = if remaining > 9 {
            remaining -= 10;
            1e10
        } else {
            remaining -= 1;
            10.0
        };

        if is_negative {
            number /= step;
        } else {
            number *= step;
        }
    }

    number
}
