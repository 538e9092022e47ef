//! Netherlands (btw-id): nine characters, `B`, two digits.
//!
//! Two numbering schemes share this shape. Companies carry their RSIN
//! with an elfproef (mod 11) check digit. Sole proprietors, since 2020,
//! carry a number whose check is ISO 7064 MOD 97-10 over the whole
//! `NL`-prefixed identifier. A number is valid if either check passes.

use super::digits::{all_digits, digit, numeric_value, weighted_sum};

const WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];
/// `NL` as MOD 97-10 values: N = 23, L = 21.
const PREFIX_VALUE: u32 = 2321;

pub(crate) fn is_valid(number: &str) -> bool {
    let upper = number.to_ascii_uppercase();
    let n = upper.as_bytes();
    if n.len() != 12 || n[9] != b'B' {
        return false;
    }
    is_valid_company(n) || is_valid_sole_proprietor(n)
}

fn is_valid_company(n: &[u8]) -> bool {
    if !all_digits(&n[..9]) || !all_digits(&n[10..]) || numeric_value(&n[10..]) == 0 {
        return false;
    }
    let check = match weighted_sum(&WEIGHTS, n, 0) % 11 {
        10 => 0,
        check => check,
    };
    check == digit(n[8])
}

/// The digit string `2321` ‖ values of every character would exceed any
/// native integer, so the remainder is carried one character at a time.
fn is_valid_sole_proprietor(n: &[u8]) -> bool {
    let remainder = n.iter().try_fold(PREFIX_VALUE % 97, |acc, &b| {
        let value = char_value(b)?;
        let shift = if value < 10 { 10 } else { 100 };
        Some((acc * shift + value) % 97)
    });
    remainder == Some(1)
}

/// 0–9 as themselves, A = 10 … Z = 35, `+` = 36, `*` = 37.
fn char_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(digit(byte)),
        b'A'..=b'Z' => Some(u32::from(byte - b'A') + 10),
        b'+' => Some(36),
        b'*' => Some(37),
        _ => None,
    }
}
