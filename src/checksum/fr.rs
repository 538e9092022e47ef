//! France (numéro de TVA): a two-character key followed by the nine-digit SIREN.
//!
//! Keys made of two digits are the historical form, `(SIREN·100 + 12) mod 97`.
//! Keys containing a letter are the newer form, drawn from an alphabet of
//! digits and letters without `I` and `O`.

use super::digits::{all_digits, numeric_value};

const KEY_ALPHABET: &[u8; 34] = b"0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 11 || !all_digits(&n[2..]) {
        return false;
    }
    let (Some(first), Some(second)) = (key_position(n[0]), key_position(n[1])) else {
        return false;
    };

    let siren = numeric_value(&n[2..]);
    if n[0].is_ascii_digit() && n[1].is_ascii_digit() {
        return (siren * 100 + 12) % 97 == u64::from(first * 10 + second);
    }

    let key = if n[0].is_ascii_digit() {
        first * 24 + second - 10
    } else {
        first * 34 + second - 100
    };
    (siren + u64::from(key / 11) + 1) % 11 == u64::from(key % 11)
}

fn key_position(byte: u8) -> Option<u32> {
    let byte = byte.to_ascii_uppercase();
    KEY_ALPHABET
        .iter()
        .position(|&c| c == byte)
        .map(|p| p as u32)
}
