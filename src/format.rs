/// Trait that abstracts over the settings used when writing numbers as text.
///
/// [`CustomFormat`] is the stock implementation; hosts that already keep these
/// settings in their own configuration type can implement the trait on it
/// directly.
///
/// [`CustomFormat`]: struct.CustomFormat.html
pub trait Format {
    /// Minimum digits left of the decimal point. Missing digits are zero-filled.
    fn min_int_digits(&self) -> usize;

    /// Minimum digits right of the decimal point. A non-zero value always
    /// writes the decimal point, even for whole numbers.
    fn min_frac_digits(&self) -> usize;

    /// Maximum fraction digits kept for floats; `0` means as many as the
    /// value carries.
    fn precision(&self) -> usize;
}
