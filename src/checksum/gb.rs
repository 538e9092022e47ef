//! United Kingdom and Northern Ireland (`XI`).
//!
//! Standard numbers have nine digits, or twelve for branch traders where
//! the last three digits name the branch. Government departments (`GD`)
//! and health authorities (`HA`) have five-character numbers instead.

use super::digits::{all_digits, numeric_value, weighted_sum};

const WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    match n.len() {
        5 => is_valid_government(n),
        9 | 12 if all_digits(n) => is_valid_standard(n),
        _ => false,
    }
}

/// The first seven digits are weighted; the check pair is added back in.
/// Both the old (mod 97) and the 2010 (mod 97 after +55) series pass.
fn is_valid_standard(n: &[u8]) -> bool {
    let sum = u64::from(weighted_sum(&WEIGHTS, n, 0)) + numeric_value(&n[7..9]);
    sum % 97 == 0 || (sum + 55) % 97 == 0
}

fn is_valid_government(n: &[u8]) -> bool {
    if !all_digits(&n[2..]) {
        return false;
    }
    let unit = numeric_value(&n[2..]);
    if n[..2].eq_ignore_ascii_case(b"GD") {
        unit < 500
    } else if n[..2].eq_ignore_ascii_case(b"HA") {
        unit >= 500
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard() {
        assert!(is_valid("980780684"));
        assert!(!is_valid("980780685"));
    }

    #[test]
    fn standard_plus_55_series() {
        assert!(is_valid("483194763"));
        assert!(is_valid("335697466"));
    }

    #[test]
    fn branch_trader() {
        assert!(is_valid("980780684001"));
        assert!(!is_valid("980780685001"));
    }

    #[test]
    fn government_departments() {
        assert!(is_valid("GD001"));
        assert!(is_valid("GD499"));
        assert!(is_valid("gd123"));
        assert!(!is_valid("GD500"));
    }

    #[test]
    fn health_authorities() {
        assert!(is_valid("HA500"));
        assert!(is_valid("HA999"));
        assert!(!is_valid("HA499"));
    }

    #[test]
    fn malformed() {
        assert!(!is_valid("XX001"));
        assert!(!is_valid("GD0A1"));
        assert!(!is_valid("98078068"));
        assert!(!is_valid("9807806840"));
        assert!(!is_valid("98078068A"));
        assert!(!is_valid("GDé1"));
        assert!(!is_valid(""));
    }
}
