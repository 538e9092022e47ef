//! Hungary (ANUM): eight digits.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 7] = [9, 7, 3, 1, 9, 7, 3];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 8 || !all_digits(n) {
        return false;
    }
    let check = (10 - weighted_sum(&WEIGHTS, n, 0) % 10) % 10;
    check == digit(n[7])
}
