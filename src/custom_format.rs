#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::custom_format_builder::CustomFormatBuilder;
use crate::format::Format;

/// Type for the settings of [`integer_to_text`] and [`float_to_text`].
///
/// The default writes at least one integer digit, no forced fraction digits and
/// every fraction digit the value carries.
///
/// # Example
/// ```
/// use num_text::{float_to_text_with, CustomFormat};
///
/// let format = CustomFormat::builder()
///     .min_int_digits(3)
///     .min_frac_digits(2)
///     .build();
///
/// assert_eq!(float_to_text_with(4.5_f64, &format), "004.50");
/// ```
///
/// [`integer_to_text`]: fn.integer_to_text.html
/// [`float_to_text`]: fn.float_to_text.html
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
pub struct CustomFormat {
    pub(crate) min_int_digits: usize,
    pub(crate) min_frac_digits: usize,
    pub(crate) precision: usize,
}

impl CustomFormat {
    /// Constructs a [`CustomFormatBuilder`].
    ///
    /// [`CustomFormatBuilder`]: struct.CustomFormatBuilder.html
    pub fn builder() -> CustomFormatBuilder {
        CustomFormatBuilder::new()
    }

    /// Turns `self` into a [`CustomFormatBuilder`].
    ///
    /// [`CustomFormatBuilder`]: struct.CustomFormatBuilder.html
    pub fn into_builder(self) -> CustomFormatBuilder {
        self.into()
    }

    /// Returns this format's minimum integer digits.
    pub fn min_int_digits(&self) -> usize {
        self.min_int_digits
    }

    /// Returns this format's minimum fraction digits.
    pub fn min_frac_digits(&self) -> usize {
        self.min_frac_digits
    }

    /// Returns this format's precision.
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl Default for CustomFormat {
    fn default() -> CustomFormat {
        CustomFormat {
            min_int_digits: 1,
            min_frac_digits: 0,
            precision: 0,
        }
    }
}

impl Format for CustomFormat {
    #[inline(always)]
    fn min_int_digits(&self) -> usize {
        self.min_int_digits
    }

    #[inline(always)]
    fn min_frac_digits(&self) -> usize {
        self.min_frac_digits
    }

    #[inline(always)]
    fn precision(&self) -> usize {
        self.precision
    }
}
