use crate::constants::U64_HEX_LEN;

/// Reads hexadecimal text right to left, four bits per character.
///
/// Characters other than `0-9`, `A-F` and `a-f` count as zero, and anything
/// before the last sixteen characters would be shifted out of a `u64`, so it
/// is skipped.
pub(crate) fn parse_hex(text: &[u8]) -> u64 {
    text.iter()
        .rev()
        .take(U64_HEX_LEN)
        .enumerate()
        .fold(0, |value, (i, &c)| value | (u64::from(nibble(c)) << (4 * i)))
}

const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        _ => 0,
    }
}
