use crate::{Error, ErrorKind};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

/// Splits an optional leading `+` or `-` off `text`.
///
/// Whitespace between the sign and the digits is skipped. A sign must be
/// followed by something other than another sign.
pub(crate) fn split_sign(text: &[u8]) -> Result<(Sign, &[u8]), Error> {
    let (sign, rest) = match text.split_first() {
        None => return Err(Error::new(ErrorKind::Empty)),
        Some((&b'-', rest)) => (Sign::Negative, soft_trim(rest)),
        Some((&b'+', rest)) => (Sign::Positive, soft_trim(rest)),
        Some(_) => return Ok((Sign::Positive, text)),
    };

    match rest.first() {
        None => Err(Error::new(ErrorKind::MissingDigits)),
        Some(&(b'-' | b'+')) => Err(Error::new(ErrorKind::UnexpectedSign)),
        Some(_) => Ok((sign, rest)),
    }
}

fn soft_trim(text: &[u8]) -> &[u8] {
    let start = text
        .iter()
        .position(|&c| !matches!(c, b' ' | b'\t' | b'\n' | b'\r'))
        .unwrap_or(text.len());
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sign() {
        assert_eq!(split_sign(b"12").unwrap(), (Sign::Positive, &b"12"[..]));
        assert_eq!(split_sign(b"+12").unwrap(), (Sign::Positive, &b"12"[..]));
        assert_eq!(split_sign(b"-12").unwrap(), (Sign::Negative, &b"12"[..]));
        assert_eq!(split_sign(b"- \t12").unwrap(), (Sign::Negative, &b"12"[..]));
    }

    #[test]
    fn test_split_sign_rejects() {
        assert_eq!(split_sign(b"").unwrap_err().kind(), ErrorKind::Empty);
        assert_eq!(split_sign(b"-").unwrap_err().kind(), ErrorKind::MissingDigits);
        assert_eq!(split_sign(b"+  ").unwrap_err().kind(), ErrorKind::MissingDigits);
        assert_eq!(split_sign(b"--1").unwrap_err().kind(), ErrorKind::UnexpectedSign);
        assert_eq!(split_sign(b"+ -1").unwrap_err().kind(), ErrorKind::UnexpectedSign);
    }
}
