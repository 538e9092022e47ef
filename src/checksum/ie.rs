//! Ireland.
//!
//! Current numbers are seven digits and a check letter, optionally
//! followed by a second letter that takes part in the checksum. Pre-2013 numbers carry a letter, `+` or `*` in second
//! position; they are rearranged into the current layout before checking.

use super::digits::{all_digits, weighted_sum};

const WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

pub(crate) fn is_valid(number: &str) -> bool {
    let upper = number.to_ascii_uppercase();
    let n = upper.as_bytes();
    if is_old_format(n) {
        let rearranged = [b'0', n[2], n[3], n[4], n[5], n[6], n[0], n[7]];
        return is_valid_current(&rearranged);
    }
    is_valid_current(n)
}

fn is_old_format(n: &[u8]) -> bool {
    n.len() == 8 && n[0].is_ascii_digit() && matches!(n[1], b'A'..=b'Z' | b'+' | b'*')
}

fn is_valid_current(n: &[u8]) -> bool {
    if !(n.len() == 8 || n.len() == 9) || !all_digits(&n[..7]) {
        return false;
    }

    let mut sum = weighted_sum(&WEIGHTS, n, 0);
    if let Some(&extra) = n.get(8) {
        let Some(value) = second_letter_value(extra) else {
            return false;
        };
        sum += 9 * value;
    }

    let expected = match sum % 23 {
        0 => b'W',
        remainder => b'A' + remainder as u8 - 1,
    };
    n[7] == expected
}

/// Position in the alphabet of the optional ninth character; `W` counts as zero.
fn second_letter_value(letter: u8) -> Option<u32> {
    match letter {
        b'W' => Some(0),
        b'A'..=b'Z' => Some(u32::from(letter - b'A') + 1),
        _ => None,
    }
}
