use crate::custom_format::CustomFormat;

/// Type for building [`CustomFormat`]s.
///
/// [`CustomFormat`]: struct.CustomFormat.html
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct CustomFormatBuilder {
    min_int_digits: usize,
    min_frac_digits: usize,
    precision: usize,
}

impl CustomFormatBuilder {
    pub(crate) fn new() -> CustomFormatBuilder {
        CustomFormat::default().into()
    }

    /// Construct a [`CustomFormat`].
    ///
    /// [`CustomFormat`]: struct.CustomFormat.html
    pub fn build(self) -> CustomFormat {
        CustomFormat {
            min_int_digits: self.min_int_digits,
            min_frac_digits: self.min_frac_digits,
            precision: self.precision,
        }
    }

    /// Sets the minimum digits written left of the decimal point.
    pub fn min_int_digits(mut self, value: usize) -> CustomFormatBuilder {
        self.min_int_digits = value;
        self
    }

    /// Sets the minimum digits written right of the decimal point.
    pub fn min_frac_digits(mut self, value: usize) -> CustomFormatBuilder {
        self.min_frac_digits = value;
        self
    }

    /// Sets the maximum fraction digits kept for floats (`0` keeps them all).
    pub fn precision(mut self, value: usize) -> CustomFormatBuilder {
        self.precision = value;
        self
    }
}

impl From<CustomFormat> for CustomFormatBuilder {
    fn from(format: CustomFormat) -> CustomFormatBuilder {
        CustomFormatBuilder {
            min_int_digits: format.min_int_digits,
            min_frac_digits: format.min_frac_digits,
            precision: format.precision,
        }
    }
}
