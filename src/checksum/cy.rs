//! Cyprus: eight digits and a trailing letter.

use super::digits::all_digits;

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 9 || !all_digits(&n[..8]) || !n[8].is_ascii_alphabetic() {
        return false;
    }
    // "12" is not issued; the first digit encodes the taxpayer type.
    &n[..2] != b"12" && matches!(n[0], b'0' | b'1' | b'3' | b'4' | b'5' | b'9')
}
