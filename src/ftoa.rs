mod float;
mod pretty;

use alloc::string::String;

pub use self::float::Float;

use crate::format::Format;

/// Writes any float as text, non-finite values included.
#[inline(never)]
pub(crate) fn format_float<Fl, Fmt>(f: Fl, format: &Fmt) -> String
where
    Fl: Float,
    Fmt: Format,
{
    if f.is_nonfinite() {
        String::from(f.format_nonfinite())
    } else {
        pretty::format64(f.to_f64(), format)
    }
}
