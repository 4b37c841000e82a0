mod exponent;
mod mantissa;

use alloc::string::String;

use arrayvec::ArrayVec;

use self::mantissa::Fraction;

use crate::constants::{
    EXPONENT_MAX_DIGITS, SCIENTIFIC_LOWER, SCIENTIFIC_PRECISION, SCIENTIFIC_UPPER, U64_MAX_LEN,
};
use crate::format::Format;
use crate::itoa::{push_digits, push_zeros, write_digits};

/// Writes a finite f64 as decimal text.
///
/// Magnitudes in `[1e-17, 1e19)` and zero are written in fixed notation;
/// everything else as one leading digit, up to fifteen fraction digits and an
/// `e` exponent, ignoring the format's minimum fraction digits.
///
/// The output is allocated once, at its final length.
#[inline(never)]
pub(crate) fn format64<Fmt: Format>(f: f64, format: &Fmt) -> String {
    let is_negative = f < 0.0;
    let mut number = f.abs();
    let mut min_frac_digits = format.min_frac_digits();
    let mut precision = format.precision();
    let mut exp = None;

    if number >= SCIENTIFIC_UPPER || (number != 0.0 && number < SCIENTIFIC_LOWER) {
        let e = exponent::normalize(&mut number);

        #[cfg(feature = "tracing")]
        tracing::trace!(exponent = e, "writing float in scientific notation");

        exp = Some(e);
        min_frac_digits = 0;
        precision = SCIENTIFIC_PRECISION;
    }

    let mut whole = number as u64;
    let fraction = Fraction::extract(number - whole as f64, whole, precision);
    if fraction.carry {
        whole += 1;
    }
    if let Some(e) = exp.as_mut() {
        // 9.99..e5 rounded up to 10e5
        if whole >= 10 {
            whole /= 10;
            *e += 1;
        }
    }

    let mut whole_digits = ArrayVec::<u8, U64_MAX_LEN>::new();
    if whole != 0 {
        write_digits(whole, &mut whole_digits);
    }

    let mut frac_digits = ArrayVec::<u8, U64_MAX_LEN>::new();
    if fraction.len != 0 {
        write_digits(fraction.value, &mut frac_digits);
    }

    let mut exp_digits = ArrayVec::<u8, EXPONENT_MAX_DIGITS>::new();
    if let Some(e) = exp {
        write_digits(u64::from(e.unsigned_abs()), &mut exp_digits);
    }

    let write_point = fraction.len != 0 || min_frac_digits != 0;
    let trailing_zeros = min_frac_digits.saturating_sub(fraction.len);

    let mut int_width = format.min_int_digits().max(whole_digits.len());
    if int_width == 0 && !write_point {
        int_width = 1;
    }

    let mut len = usize::from(is_negative) + int_width;
    if write_point {
        len += 1 + fraction.len + trailing_zeros;
    }
    if let Some(e) = exp {
        len += 1 + usize::from(e < 0) + exp_digits.len();
    }

    let mut text = String::with_capacity(len);

    if is_negative {
        text.push('-');
    }

    push_zeros(&mut text, int_width - whole_digits.len());
    push_digits(&mut text, &whole_digits);

    if write_point {
        text.push('.');
        push_zeros(&mut text, fraction.len - frac_digits.len());
        push_digits(&mut text, &frac_digits);
        push_zeros(&mut text, trailing_zeros);
    }

    if let Some(e) = exp {
        text.push('e');
        if e < 0 {
            text.push('-');
        }
        push_digits(&mut text, &exp_digits);
    }

    debug_assert_eq!(text.len(), len);
    text
}
