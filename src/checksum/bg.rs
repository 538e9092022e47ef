//! Bulgaria.
//!
//! Nine digits identify a legal entity (BULSTAT). Ten digits are either
//! a citizen's personal number (EGN), a foreigner's number (LNC), or
//! another ten-digit registration; a number passing any of the three
//! checks is accepted.

use chrono::NaiveDate;

use super::digits::{all_digits, digit, weighted_sum};

const LEGAL_WEIGHTS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
const LEGAL_FALLBACK_WEIGHTS: [u32; 8] = [3, 4, 5, 6, 7, 8, 9, 10];
const PERSON_WEIGHTS: [u32; 9] = [2, 4, 8, 5, 10, 9, 7, 3, 6];
const FOREIGNER_WEIGHTS: [u32; 9] = [21, 19, 17, 13, 11, 9, 7, 3, 1];
const OTHER_WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if !all_digits(n) {
        return false;
    }
    match n.len() {
        9 => is_valid_legal_entity(n),
        10 => is_valid_person(n) || is_valid_foreigner(n) || is_valid_other(n),
        _ => false,
    }
}

fn is_valid_legal_entity(n: &[u8]) -> bool {
    let mut check = weighted_sum(&LEGAL_WEIGHTS, n, 0) % 11;
    if check == 10 {
        check = weighted_sum(&LEGAL_FALLBACK_WEIGHTS, n, 0) % 11;
        if check == 10 {
            check = 0;
        }
    }
    check == digit(n[8])
}

/// EGN: YYMMDD birth date, where months 21–32 mean the 1800s and
/// 41–52 the 2000s.
fn is_valid_person(n: &[u8]) -> bool {
    let year = (digit(n[0]) * 10 + digit(n[1])) as i32;
    let month = digit(n[2]) * 10 + digit(n[3]);
    let day = digit(n[4]) * 10 + digit(n[5]);
    let (year, month) = match month {
        41.. => (2000 + year, month - 40),
        21.. => (1800 + year, month - 20),
        _ => (1900 + year, month),
    };
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return false;
    }

    let check = weighted_sum(&PERSON_WEIGHTS, n, 0) % 11 % 10;
    check == digit(n[9])
}

fn is_valid_foreigner(n: &[u8]) -> bool {
    weighted_sum(&FOREIGNER_WEIGHTS, n, 0) % 10 == digit(n[9])
}

fn is_valid_other(n: &[u8]) -> bool {
    let check = match 11 - weighted_sum(&OTHER_WEIGHTS, n, 0) % 11 {
        10 => return false,
        11 => 0,
        check => check,
    };
    check == digit(n[9])
}
