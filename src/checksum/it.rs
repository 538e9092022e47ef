//! Italy (partita IVA): eleven digits, Luhn check digit.

use super::digits::{all_digits, digit, is_even};

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 11 || !all_digits(n) || n[..7].iter().all(|&b| b == b'0') {
        return false;
    }

    let sum: u32 = n[..10]
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let d = digit(b);
            if is_even(i) { d } else { d / 5 + (2 * d) % 10 }
        })
        .sum();
    (10 - sum % 10) % 10 == digit(n[10])
}
