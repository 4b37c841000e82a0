use alloc::string::String;

use crate::constants::U64_MAX_LEN;

impl super::Integer for i64 {
    #[inline(never)]
    fn write_text(self, min_digits: usize) -> String {
        super::compose::<U64_MAX_LEN>(self < 0, self.unsigned_abs(), min_digits)
    }
}

impl super::Integer for u64 {
    #[inline(never)]
    fn write_text(self, min_digits: usize) -> String {
        super::compose::<U64_MAX_LEN>(false, self, min_digits)
    }
}
