//! Belgium: ten digits (the leading zero may be omitted), mod 97 check pair.

use super::digits::{all_digits, numeric_value};

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if !all_digits(n) {
        return false;
    }
    // A nine-digit number is the ten-digit one without its leading zero,
    // which does not change the value of the first eight digits.
    let (base, check) = match n.len() {
        9 => n.split_at(7),
        10 => n.split_at(8),
        _ => return false,
    };

    97 - numeric_value(base) % 97 == numeric_value(check)
}
