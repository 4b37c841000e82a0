use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// This crate's error kind.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// The text was empty.
    Empty,

    /// A sign (and optional whitespace) was not followed by any digit.
    MissingDigits,

    /// The number started with `0` but was not `0` itself (or `0.` for floats).
    LeadingZero,

    /// A second sign, or a `-` in front of an unsigned integer.
    UnexpectedSign,

    /// A byte that is not allowed at its position.
    InvalidDigit(u8),

    /// A decimal point with no digit after it.
    DanglingDecimal,

    /// An exponent marker without digits, or with a misplaced sign.
    Exponent,

    /// The value does not fit into the target type.
    Overflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;
        match self {
            Empty => write!(f, "cannot parse a number from empty text"),
            MissingDigits => write!(f, "sign is not followed by any digit"),
            LeadingZero => write!(f, "leading zeros are not allowed"),
            UnexpectedSign => write!(f, "unexpected sign"),
            InvalidDigit(byte) => {
                if byte.is_ascii_graphic() {
                    write!(f, "invalid character '{}'", char::from(*byte))
                } else {
                    write!(f, "invalid byte 0x{:02x}", byte)
                }
            }
            DanglingDecimal => write!(f, "decimal point is not followed by a digit"),
            Exponent => write!(f, "malformed exponent"),
            Overflow => write!(f, "number too large for the target type"),
        }
    }
}
