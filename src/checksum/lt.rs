//! Lithuania (PVM): nine digits for legal entities, twelve for
//! temporary taxpayers. The digit before the check digit of a legal
//! entity (and the eleventh digit of a temporary number) is always `1`.

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2];
const FALLBACK_WEIGHTS: [u32; 11] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if !all_digits(n) {
        return false;
    }
    let body = match n.len() {
        9 if n[7] == b'1' => 8,
        12 if n[10] == b'1' => 11,
        _ => return false,
    };

    let mut check = weighted_sum(&WEIGHTS[..body], n, 0) % 11;
    if check == 10 {
        check = weighted_sum(&FALLBACK_WEIGHTS[..body], n, 0) % 11;
        if check == 10 {
            check = 0;
        }
    }
    check == digit(n[body])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_entity() {
        assert!(is_valid("119511515"));
        assert!(!is_valid("119511516"));
    }

    #[test]
    fn legal_entity_fallback_weights() {
        assert!(is_valid("963481610"));
        assert!(is_valid("375202710"));
    }

    #[test]
    fn temporary_taxpayer() {
        assert!(is_valid("100001919017"));
        assert!(is_valid("100004801610"));
        assert!(is_valid("494614032010"));
        assert!(!is_valid("100001919018"));
    }

    #[test]
    fn marker_digit_must_be_one() {
        assert!(!is_valid("119511525"));
        assert!(!is_valid("100001919027"));
    }

    #[test]
    fn malformed() {
        assert!(!is_valid("11951151"));
        assert!(!is_valid("1195115150"));
        assert!(!is_valid("11951151X"));
    }
}
