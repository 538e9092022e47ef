//! Poland (NIP): ten digits.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    n.len() == 10 && all_digits(n) && weighted_sum(&WEIGHTS, n, 0) % 11 == digit(n[9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(is_valid("8567346215"));
        assert!(is_valid("3928621931"));
        assert!(is_valid("8333290827"));
    }

    #[test]
    fn invalid() {
        assert!(!is_valid("3928621933"));
        assert!(!is_valid("392862193"));
        assert!(!is_valid("39286219310"));
        assert!(!is_valid("392862193A"));
    }
}
