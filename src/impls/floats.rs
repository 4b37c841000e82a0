use alloc::string::String;

use crate::format::Format;
use crate::ftoa::format_float;
use crate::to_text::ToText;

impl ToText for f32 {
    #[inline(always)]
    fn to_text_with<Fmt: Format>(&self, format: &Fmt) -> String {
        format_float(*self, format)
    }
}

impl ToText for f64 {
    #[inline(always)]
    fn to_text_with<Fmt: Format>(&self, format: &Fmt) -> String {
        format_float(*self, format)
    }
}
