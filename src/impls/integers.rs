use alloc::string::String;

use crate::format::Format;
use crate::itoa::Integer;
use crate::to_text::ToText;

macro_rules! impl_ToText {
    ($($t:ident),*) => {$(
        impl ToText for $t {
            #[inline(always)]
            fn to_text_with<Fmt: Format>(&self, format: &Fmt) -> String {
                self.write_text(format.min_int_digits())
            }
        }
    )*};
}

impl_ToText!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
