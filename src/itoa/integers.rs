use alloc::string::String;

use crate::constants::*;

// Signed values are widened with sign extension, then negated in two's
// complement so that `MIN` keeps its full magnitude.
macro_rules! impl_Integer {
    ($($max_len:expr => $t:ident),* as $conv_fn:ident) => {$(
        impl super::Integer for $t {
            #[allow(unused_comparisons)]
            #[inline(never)]
            fn write_text(self, min_digits: usize) -> String {
                let is_nonnegative = self >= 0;
                let n = if is_nonnegative {
                    self as $conv_fn
                } else {
                    (!(self as $conv_fn)).wrapping_add(1)
                };

                super::compose::<{ $max_len }>(!is_nonnegative, n as u64, min_digits)
            }
        }
    )*};
}

impl_Integer!(
    U8_MAX_LEN => i8,
    U8_MAX_LEN => u8,
    U16_MAX_LEN => i16,
    U16_MAX_LEN => u16,
    U32_MAX_LEN => i32,
    U32_MAX_LEN => u32
    as u32);

#[cfg(target_pointer_width = "16")]
impl_Integer!(U16_MAX_LEN => isize, U16_MAX_LEN => usize as u16);

#[cfg(target_pointer_width = "32")]
impl_Integer!(U32_MAX_LEN => isize, U32_MAX_LEN => usize as u32);

#[cfg(target_pointer_width = "64")]
impl_Integer!(U64_MAX_LEN => isize, U64_MAX_LEN => usize as u64);
