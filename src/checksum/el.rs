//! Greece (ΑΦΜ): nine digits, powers-of-two weights.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 8] = [256, 128, 64, 32, 16, 8, 4, 2];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 9 || !all_digits(n) {
        return false;
    }
    let check = match weighted_sum(&WEIGHTS, n, 0) % 11 {
        10 => 0,
        check => check,
    };
    check == digit(n[8])
}
