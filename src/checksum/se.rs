//! Sweden (momsregistreringsnummer): the ten-digit organisation number
//! followed by a two-digit suffix, normally `01`.

use super::digits::{all_digits, cross_sum, digit, is_even, numeric_value};

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if n.len() != 12 || !all_digits(n) || !(1..=94).contains(&numeric_value(&n[10..])) {
        return false;
    }

    let sum: u32 = n[..9]
        .iter()
        .enumerate()
        .map(|(i, &b)| cross_sum(digit(b) * if is_even(i) { 2 } else { 1 }))
        .sum();
    (10 - sum % 10) % 10 == digit(n[9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(is_valid("556188840401"));
        assert!(is_valid("556036079301"));
        assert!(is_valid("556036079394"));
    }

    #[test]
    fn wrong_check_digit() {
        assert!(!is_valid("556036079401"));
    }

    #[test]
    fn suffix_out_of_range() {
        assert!(!is_valid("556036079300"));
        assert!(!is_valid("556036079395"));
    }

    #[test]
    fn malformed() {
        assert!(!is_valid("5560360793"));
        assert!(!is_valid("55603607930"));
        assert!(!is_valid("5560360793001"));
        assert!(!is_valid("55603607930A"));
    }
}
