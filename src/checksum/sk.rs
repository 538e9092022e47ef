//! Slovakia (IČ DPH): ten digits, the whole number divisible by 11.

use super::digits::{all_digits, numeric_value};

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    n.len() == 10
        && all_digits(n)
        && n[0] != b'0'
        && !matches!(n[2], b'0' | b'1' | b'5' | b'6')
        && numeric_value(n) % 11 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(is_valid("4030000007"));
        assert!(is_valid("2022749619"));
        assert!(is_valid("8489497214"));
    }

    #[test]
    fn not_divisible() {
        assert!(!is_valid("4030000008"));
    }

    #[test]
    fn reserved_third_digit() {
        // 2012749618 is divisible by 11, but the third digit is 1
        assert!(!is_valid("2012749618"));
    }

    #[test]
    fn malformed() {
        assert!(!is_valid("0030000007"));
        assert!(!is_valid("403000000"));
        assert!(!is_valid("40300000070"));
    }
}
