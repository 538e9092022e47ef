//! Portugal (NIF): nine digits.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 9 || !all_digits(n) {
        return false;
    }
    let check = match 11 - weighted_sum(&WEIGHTS, n, 0) % 11 {
        10 | 11 => 0,
        check => check,
    };
    check == digit(n[8])
}
