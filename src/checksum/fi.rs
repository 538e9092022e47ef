//! Finland (Y-tunnus): eight digits, mod 11 check digit.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 8 || !all_digits(n) {
        return false;
    }
    // Remainder 1 would need check digit 10; such numbers are never issued.
    let check = match weighted_sum(&WEIGHTS, n, 0) % 11 {
        0 => 0,
        1 => return false,
        remainder => 11 - remainder,
    };
    check == digit(n[7])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(is_valid("09853608"));
        assert!(is_valid("20774740"));
    }

    #[test]
    fn remainder_zero() {
        assert!(is_valid("96445310"));
        assert!(is_valid("34990890"));
    }

    #[test]
    fn remainder_one_never_valid() {
        for check in 0..=9 {
            assert!(!is_valid(&format!("2797039{check}")));
        }
    }

    #[test]
    fn invalid() {
        assert!(!is_valid("09853607"));
        assert!(!is_valid("0985360"));
        assert!(!is_valid("098536080"));
    }
}
