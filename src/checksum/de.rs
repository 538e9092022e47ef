//! Germany (USt-IdNr.): nine digits, ISO 7064 MOD 11,10 check digit.

use super::digits::{all_digits, digit, mod_11_10_product};

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 9 || !all_digits(n) || n[0] == b'0' {
        return false;
    }

    let product = mod_11_10_product(&n[..8]);
    let check = match 11 - product {
        10 => 0,
        check => check,
    };
    check == digit(n[8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(is_valid("111111125"));
        assert!(is_valid("136695976"));
    }

    #[test]
    fn wrong_check_digit() {
        assert!(!is_valid("111111124"));
        assert!(!is_valid("136695977"));
    }

    #[test]
    fn leading_zero_rejected() {
        assert!(!is_valid("011111125"));
    }

    #[test]
    fn wrong_length() {
        assert!(!is_valid("1234567"));
        assert!(!is_valid("11111112"));
        assert!(!is_valid("1111111250"));
    }

    #[test]
    fn letters_rejected() {
        assert!(!is_valid("11111112A"));
    }
}
