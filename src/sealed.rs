pub trait Sealed {}

macro_rules! impl_sealed {
    ($($t:ty),*) => {$(
        impl Sealed for $t {}
    )*};
}

impl_sealed!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
