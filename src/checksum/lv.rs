//! Latvia (PVN): eleven digits. Legal entities start with a digit above 3;
//! numbers of natural persons are not accepted.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 10] = [9, 1, 4, 8, 3, 10, 2, 5, 7, 6];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 11 || !all_digits(n) || digit(n[0]) <= 3 {
        return false;
    }

    let check = 3 - (weighted_sum(&WEIGHTS, n, 0) % 11) as i32;
    let check = match check {
        -1 => return false,
        c if c < -1 => c + 11,
        c => c,
    };
    check == digit(n[10]) as i32
}
