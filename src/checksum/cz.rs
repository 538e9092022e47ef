//! Czech Republic (DIČ).
//!
//! - 8 digits: legal entity, distance to the next multiple of 11 as check digit.
//! - 9 digits starting with 6: "special" individuals, mod 11 through a
//!   lookup table.
//! - 9 digits otherwise: birth number issued before 1954 (no check digit).
//! - 10 digits: birth number, divisible by 11.

use chrono::NaiveDate;

use super::digits::{all_digits, digit, weighted_sum};

const WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];
const SPECIAL_LOOKUP: [u32; 11] = [8, 7, 6, 5, 4, 3, 2, 1, 0, 9, 8];

pub(crate) fn is_valid(number: &str) -> bool {
    let n = number.as_bytes();
    if !all_digits(n) {
        return false;
    }
    match n.len() {
        8 => is_valid_legal_entity(n),
        9 if n[0] == b'6' => is_valid_special(n),
        9 => is_plausible_birth_date(n, false),
        10 => is_plausible_birth_date(n, true) && is_valid_long_birth_number(n),
        _ => false,
    }
}

fn is_valid_legal_entity(n: &[u8]) -> bool {
    if n[0] == b'9' {
        return false;
    }
    // remainder 0 means no distance, so the check digit is 0
    let check = (11 - weighted_sum(&WEIGHTS, n, 0) % 11) % 11 % 10;
    check == digit(n[7])
}

fn is_valid_special(n: &[u8]) -> bool {
    let distance = 11 - weighted_sum(&WEIGHTS, n, 1) % 11;
    SPECIAL_LOOKUP[distance as usize - 1] == digit(n[8])
}

/// YYMMDD prefix of a birth number. Women have 50 added to the month;
/// numbers issued since 2004 may add 20 (or 70) instead.
fn is_plausible_birth_date(n: &[u8], long_form: bool) -> bool {
    let yy = (digit(n[0]) * 10 + digit(n[1])) as i32;
    let mut month = digit(n[2]) * 10 + digit(n[3]);
    let day = digit(n[4]) * 10 + digit(n[5]);

    if long_form && month > 70 {
        month -= 70;
    } else if month > 50 {
        month -= 50;
    } else if long_form && month > 20 {
        month -= 20;
    }

    let year = if long_form {
        if yy >= 54 { 1900 + yy } else { 2000 + yy }
    } else {
        // nine-digit numbers stopped being issued at the end of 1953
        if yy >= 54 {
            return false;
        }
        1900 + yy
    };

    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Pairs of digits summed: 100 ≡ 1 (mod 11), so this is the whole
/// ten-digit number mod 11 without building it.
fn is_valid_long_birth_number(n: &[u8]) -> bool {
    let sum: u32 = n
        .chunks(2)
        .map(|pair| digit(pair[0]) * 10 + digit(pair[1]))
        .sum();
    sum % 11 == 0
}
