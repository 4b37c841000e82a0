mod integer64;
mod integers;

use alloc::string::String;
use core::iter;

use arrayvec::ArrayVec;

/// An integer that can be written as decimal text.
///
/// This trait is sealed and cannot be implemented for types outside of this crate.
pub trait Integer: crate::sealed::Sealed + Copy {
    #[doc(hidden)]
    fn write_text(self, min_digits: usize) -> String;
}

/// Pushes the decimal digits of `n` into `digits`, least significant first.
///
/// Zero writes a single `'0'`.
pub(crate) fn write_digits<const N: usize>(mut n: u64, digits: &mut ArrayVec<u8, N>) {
    loop {
        digits.push(b'0' + (n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
}

/// Number of decimal digits in `n`.
pub(crate) fn decimal_length(mut n: u64) -> usize {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

/// Appends digits produced by [`write_digits`] in reading order.
pub(crate) fn push_digits(text: &mut String, digits: &[u8]) {
    text.extend(digits.iter().rev().map(|&d| char::from(d)));
}

pub(crate) fn push_zeros(text: &mut String, count: usize) {
    text.extend(iter::repeat('0').take(count));
}

/// Writes `magnitude` with an optional minus sign, zero-filled to `min_digits`.
///
/// `N` is the widest decimal text of the source type, sign excluded.
fn compose<const N: usize>(is_negative: bool, magnitude: u64, min_digits: usize) -> String {
    let mut digits = ArrayVec::<u8, N>::new();
    write_digits(magnitude, &mut digits);

    let width = min_digits.max(digits.len());
    let mut text = String::with_capacity(usize::from(is_negative) + width);

    if is_negative {
        text.push('-');
    }
    push_zeros(&mut text, width - digits.len());
    push_digits(&mut text, &digits);

    text
}
