//! Austria (UID): `U` followed by eight digits, the last one a check digit.

use super::digits::{all_digits, digit, weighted_cross_sum};

const WEIGHTS: [u32; 7] = [1, 2, 1, 2, 1, 2, 1];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 9 || !n[0].eq_ignore_ascii_case(&b'U') || !all_digits(&n[1..]) {
        return false;
    }

    // At most 7·9, so the subtraction cannot underflow.
    let sum = weighted_cross_sum(&WEIGHTS, n, 1);
    (96 - sum) % 10 == digit(n[8])
}
