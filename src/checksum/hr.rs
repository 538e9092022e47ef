//! Croatia (OIB): eleven digits, ISO 7064 MOD 11,10.

use super::digits::{all_digits, digit, mod_11_10_product};

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 11 || !all_digits(n) {
        return false;
    }
    (mod_11_10_product(&n[..10]) + digit(n[10])) % 10 == 1
}
