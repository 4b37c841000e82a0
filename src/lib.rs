/*!
[![Documentation](https://docs.rs/num-text/badge.svg)](https://docs.rs/num-text/)

A Rust crate for converting between numbers and their decimal (and hexadecimal) text,
one digit at a time.

Everything here is done with explicit digit arithmetic rather than `core::fmt` or
`str::parse`, which gives exact control over zero padding, leading-zero rejection,
exponent syntax, rounding and the switch between fixed and scientific notation.
None of the functions keep state between calls.

# Formatting

[`integer_to_text`] writes any integer up to 64 bits, zero-filled to a minimum number
of digits. The minus sign does not count as a digit.

```rust
use num_text::integer_to_text;

assert_eq!(integer_to_text(42u32, 1), "42");
assert_eq!(integer_to_text(0, 4), "0000");
assert_eq!(integer_to_text(-7i64, 3), "-007");
```

[`float_to_text`] takes a minimum count of integer digits, a minimum count of fraction
digits and a precision (the most fraction digits to keep; `0` keeps all the value
carries). Rounding is half up and trailing fraction zeros are dropped. Magnitudes at or
above `1e19`, and non-zero magnitudes below `1e-17`, are written in scientific notation.

```rust
use num_text::float_to_text;

assert_eq!(float_to_text(1234.5678, 1, 0, 2), "1234.57");
assert_eq!(float_to_text(0.0, 1, 2, 0), "0.00");
assert_eq!(float_to_text(0.00123, 1, 0, 0), "0.00123");
assert_eq!(float_to_text(3e20, 1, 0, 0), "3e20");
```

The same settings can be kept in a [`CustomFormat`] and passed to
[`float_to_text_with`] or [`ToText::to_text_with`].

# Parsing

[`parse_integer`] and [`parse_float`] return a typed [`Error`] on malformed text;
[`try_text_to_integer`] and [`try_text_to_float`] write into an output variable and
report success as a `bool`, resetting the output to zero on failure.

```rust
use num_text::{parse_float, parse_integer, try_text_to_integer, ErrorKind};

assert_eq!(parse_integer::<i32>("-120"), Ok(-120));
assert_eq!(parse_integer::<u8>("007").unwrap_err().kind(), ErrorKind::LeadingZero);
assert_eq!(parse_float::<f64>("1.5e2"), Ok(150.0));

let mut n = 5u64;
assert!(!try_text_to_integer(&mut n, "12a"));
assert_eq!(n, 0);
```

[`hex_text_to_integer`] never fails; characters that are not hex digits count as zero.

```rust
assert_eq!(num_text::hex_text_to_integer("1a2b"), 0x1a2b);
```

# Features

* `std` (default): implements `std::error::Error` for [`Error`]. Without it the crate
  is `no_std` and only needs `alloc`.
* `with-serde`: `Serialize`/`Deserialize` for [`CustomFormat`], [`Error`] and
  [`ErrorKind`].
* `tracing`: emits `trace` events for rejected text and for floats written in
  scientific notation.

[`integer_to_text`]: fn.integer_to_text.html
[`float_to_text`]: fn.float_to_text.html
[`float_to_text_with`]: fn.float_to_text_with.html
[`parse_integer`]: fn.parse_integer.html
[`parse_float`]: fn.parse_float.html
[`try_text_to_integer`]: fn.try_text_to_integer.html
[`try_text_to_float`]: fn.try_text_to_float.html
[`hex_text_to_integer`]: fn.hex_text_to_integer.html
[`CustomFormat`]: struct.CustomFormat.html
[`Error`]: struct.Error.html
[`ErrorKind`]: enum.ErrorKind.html
[`ToText::to_text_with`]: trait.ToText.html#tymethod.to_text_with
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
#![doc(html_root_url = "https://docs.rs/num-text/0.1.0")]

extern crate alloc;

mod atof;
mod atoi;
mod constants;
mod custom_format;
mod custom_format_builder;
mod error;
mod error_kind;
mod format;
mod ftoa;
mod hex;
mod impls;
mod itoa;
mod sealed;
mod sign;
mod to_text;

use alloc::string::String;

pub use self::atoi::ParseInteger;
pub use self::custom_format::CustomFormat;
pub use self::custom_format_builder::CustomFormatBuilder;
pub use self::error::Error;
pub use self::error_kind::ErrorKind;
pub use self::format::Format;
pub use self::ftoa::Float;
pub use self::itoa::Integer;
pub use self::to_text::ToText;

/// Writes an integer as decimal text, zero-filled on the left to at least
/// `min_digits` digits.
///
/// Zero is always written with at least one digit.
pub fn integer_to_text<N: Integer>(n: N, min_digits: usize) -> String {
    n.write_text(min_digits)
}

/// Parses decimal text into an integer.
///
/// Accepts an optional `+` or `-` (whitespace may follow it) and then only
/// ASCII digits, without leading zeros. Unsigned types reject `-`, and values
/// outside the type's range are rejected with [`ErrorKind::Overflow`].
///
/// [`ErrorKind::Overflow`]: enum.ErrorKind.html#variant.Overflow
pub fn parse_integer<N: ParseInteger>(text: impl AsRef<[u8]>) -> Result<N, Error> {
    N::parse_text(text.as_ref())
}

/// Parses decimal text into `out`, returning whether it succeeded.
///
/// On failure `out` is set to zero. See [`parse_integer`] for the accepted syntax.
///
/// [`parse_integer`]: fn.parse_integer.html
pub fn try_text_to_integer<N: ParseInteger>(out: &mut N, text: impl AsRef<[u8]>) -> bool {
    match parse_integer(text) {
        Ok(n) => {
            *out = n;
            true
        }
        Err(_) => {
            *out = N::default();
            false
        }
    }
}

/// Writes a float as decimal text.
///
/// * `min_int_digits`: the integer part is zero-filled to this many digits.
/// * `min_frac_digits`: the fraction is zero-filled to this many digits; any
///   non-zero value forces the decimal point.
/// * `precision`: the most fraction digits to keep, `0` for all. The last
///   kept digit is rounded half up.
///
/// Magnitudes at or above `1e19` and non-zero magnitudes below `1e-17` are
/// written as `d.ddde[-]x` with up to fifteen fraction digits.
pub fn float_to_text<F: Float>(
    f: F,
    min_int_digits: usize,
    min_frac_digits: usize,
    precision: usize,
) -> String {
    let format = CustomFormat::builder()
        .min_int_digits(min_int_digits)
        .min_frac_digits(min_frac_digits)
        .precision(precision)
        .build();
    ftoa::format_float(f, &format)
}

/// Writes a float as decimal text using the settings of `format`.
///
/// See [`float_to_text`].
///
/// [`float_to_text`]: fn.float_to_text.html
pub fn float_to_text_with<F: Float, Fmt: Format>(f: F, format: &Fmt) -> String {
    ftoa::format_float(f, format)
}

/// Parses decimal text, optionally in scientific notation, into a float.
///
/// Accepts an optional sign (whitespace may follow it), digits with at most
/// one decimal point that must be followed by a digit, and an optional
/// `e`/`E` exponent with an optional sign and up to four digits. Leading zeros
/// are rejected unless the number is `0` or starts with `0.`.
///
/// The result is an approximation: at most 17 integer digits and 19
/// characters of mantissa contribute to it.
pub fn parse_float<F: Float>(text: impl AsRef<[u8]>) -> Result<F, Error> {
    atof::parse_f64(text.as_ref()).map(F::from_f64)
}

/// Parses decimal text into `out`, returning whether it succeeded.
///
/// On failure `out` is set to zero. See [`parse_float`] for the accepted syntax.
///
/// [`parse_float`]: fn.parse_float.html
pub fn try_text_to_float<F: Float>(out: &mut F, text: impl AsRef<[u8]>) -> bool {
    match parse_float(text) {
        Ok(f) => {
            *out = f;
            true
        }
        Err(_) => {
            *out = F::from_f64(0.0);
            false
        }
    }
}

/// Reads hexadecimal text (no sign, no `0x` prefix) into an integer.
///
/// This never fails: characters other than `0-9`, `A-F` and `a-f` add
/// nothing, and only the last sixteen characters are read.
pub fn hex_text_to_integer(text: impl AsRef<[u8]>) -> u64 {
    hex::parse_hex(text.as_ref())
}
