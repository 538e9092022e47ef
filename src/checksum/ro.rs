//! Romania (CIF): two to ten digits, read as if left-padded with zeros.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if !(2..=10).contains(&n.len()) || !all_digits(n) {
        return false;
    }

    // Right-align the number against the weights instead of padding it.
    let (body, check) = n.split_at(n.len() - 1);
    let weights = &WEIGHTS[WEIGHTS.len() - body.len()..];
    let check_value = match weighted_sum(weights, body, 0) * 10 % 11 {
        10 => 0,
        value => value,
    };
    check_value == digit(check[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        assert!(is_valid("11198699"));
        assert!(is_valid("14186770"));
        assert!(is_valid("18547290"));
    }

    #[test]
    fn short_numbers() {
        assert!(is_valid("133309"));
        assert!(is_valid("514680"));
        assert!(is_valid("0014186770"));
    }

    #[test]
    fn invalid() {
        assert!(!is_valid("11198698"));
        assert!(!is_valid("1"));
        assert!(!is_valid("11111111111"));
        assert!(!is_valid("1119869A"));
    }
}
