//! Slovenia (DDV): eight digits, first digit non-zero.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 8 || !all_digits(n) || n[0] == b'0' {
        return false;
    }
    let check = match 11 - weighted_sum(&WEIGHTS, n, 0) % 11 {
        11 => return false,
        10 => 0,
        check => check,
    };
    check == digit(n[7])
}
