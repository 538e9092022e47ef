//! Denmark (CVR): eight digits whose weighted sum is divisible by 11.

use super::digits::{all_digits, weighted_sum};

const WEIGHTS: [u32; 8] = [2, 7, 6, 5, 4, 3, 2, 1];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    n.len() == 8 && all_digits(n) && n[0] != b'0' && weighted_sum(&WEIGHTS, n, 0) % 11 == 0
}
