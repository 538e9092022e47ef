//! Malta: eight digits, two-digit mod 37 check.

use super::digits::{all_digits, numeric_value, weighted_sum};

const WEIGHTS: [u32; 6] = [3, 4, 6, 7, 8, 9];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 8 || !all_digits(n) || numeric_value(&n[..6]) <= 100_000 {
        return false;
    }
    let check = 37 - weighted_sum(&WEIGHTS, n, 0) % 37;
    u64::from(check) == numeric_value(&n[6..])
}
