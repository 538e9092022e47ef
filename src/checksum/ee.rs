//! Estonia (KMKR): nine digits.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 9 || !all_digits(n) {
        return false;
    }
    let check = (10 - weighted_sum(&WEIGHTS, n, 0) % 10) % 10;
    check == digit(n[8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(is_valid("100207415"));
        assert!(is_valid("100931558"));
        assert!(is_valid("102958445"));
    }

    #[test]
    fn invalid() {
        assert!(!is_valid("100931559"));
        assert!(!is_valid("10093155"));
        assert!(!is_valid("1009315580"));
        assert!(!is_valid("10093155X"));
    }
}
