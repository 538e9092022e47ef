//! Luxembourg: eight digits, the last two are the first six mod 89.

use super::digits::{all_digits, numeric_value};

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    n.len() == 8 && all_digits(n) && numeric_value(&n[..6]) % 89 == numeric_value(&n[6..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(is_valid("10000356"));
        assert!(is_valid("15027442"));
        assert!(is_valid("03686317"));
    }

    #[test]
    fn invalid() {
        assert!(!is_valid("10000357"));
        assert!(!is_valid("1000035"));
        assert!(!is_valid("100003560"));
        assert!(!is_valid("1000035A"));
    }
}
