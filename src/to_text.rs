use alloc::string::String;

use crate::custom_format::CustomFormat;
use crate::format::Format;
use crate::sealed::Sealed;

/// Trait for converting numbers into owned decimal text.
///
/// This trait is sealed; so you may not implement it on your own types.
pub trait ToText: Sealed {
    /// Writes `self` with the default [`CustomFormat`].
    ///
    /// [`CustomFormat`]: struct.CustomFormat.html
    fn to_text(&self) -> String {
        self.to_text_with(&CustomFormat::default())
    }

    /// Writes `self` with the given format. Integers only use its minimum
    /// integer digits.
    fn to_text_with<Fmt: Format>(&self, format: &Fmt) -> String;
}
