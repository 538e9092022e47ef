//! Spain (NIF).
//!
//! Nine characters, the first and last of which may be letters:
//!
//! | first | last | holder |
//! |---|---|---|
//! | A–H, J, U, V | digit | companies, check digit |
//! | A–H, N–S, W | letter A–J | other legal entities, check letter |
//! | digit, Y, Z | letter | Spanish citizens (DNI) and foreigners (NIE) |
//! | K, L, M, X | letter | other individuals |
//!
//! Legal entities use a Luhn-style cross-sum over digits 2–8; individuals
//! use the DNI mod 23 letter table.

use super::digits::{all_digits, digit, numeric_value, weighted_cross_sum};

const WEIGHTS: [u32; 7] = [2, 1, 2, 1, 2, 1, 2];
const DNI_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

pub(crate) fn is_valid(number: &str) -> bool {
    let upper = number.to_ascii_uppercase();
    let n = upper.as_bytes();
    if n.len() != 9 || !all_digits(&n[1..8]) {
        return false;
    }

    let (first, last) = (n[0], n[8]);
    match (first, last) {
        (b'A'..=b'H' | b'J' | b'U' | b'V', b'0'..=b'9') => {
            legal_entity_check(n) % 10 == digit(last)
        }
        (b'A'..=b'H' | b'N'..=b'S' | b'W', b'A'..=b'J') => {
            // 1 → A … 10 → J
            b'A' + (legal_entity_check(n) as u8) - 1 == last
        }
        (b'0'..=b'9' | b'Y' | b'Z', b'A'..=b'Z') => {
            // NIE prefixes stand for a leading digit: Y = 1, Z = 2
            let prefix = match first {
                b'Y' => 1,
                b'Z' => 2,
                d => u64::from(digit(d)),
            };
            let value = prefix * 10_000_000 + numeric_value(&n[1..8]);
            dni_letter(value) == last
        }
        (b'K' | b'L' | b'M' | b'X', b'A'..=b'Z') => dni_letter(numeric_value(&n[1..8])) == last,
        _ => false,
    }
}

/// Distance from the cross-sum to the next multiple of ten, in 1..=10.
fn legal_entity_check(n: &[u8]) -> u32 {
    10 - weighted_cross_sum(&WEIGHTS, n, 1) % 10
}

fn dni_letter(value: u64) -> u8 {
    DNI_LETTERS[(value % 23) as usize]
}
