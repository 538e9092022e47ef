//! Digit arithmetic shared by the country rules.
//!
//! Every helper reads ASCII bytes and trusts the caller to have checked
//! that the positions it reads hold digits. Positions past the end of
//! the input are skipped rather than indexed.

/// True when `bytes` is non-empty and holds ASCII digits only.
pub(crate) fn all_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// Value of one ASCII digit.
#[inline]
pub(crate) fn digit(byte: u8) -> u32 {
    u32::from(byte.wrapping_sub(b'0'))
}

/// Decimal value of a run of ASCII digits. At most 19 digits fit.
pub(crate) fn numeric_value(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0, |acc, &b| acc * 10 + u64::from(digit(b)))
}

/// Sum of the decimal digits of `value`, e.g. 18 → 9.
#[inline]
pub(crate) fn cross_sum(value: u32) -> u32 {
    let mut sum = 0;
    let mut rest = value;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum
}

#[inline]
pub(crate) fn is_even(index: usize) -> bool {
    index % 2 == 0
}

/// Σ digit·weight, pairing `weights[0]` with the digit at `start`.
pub(crate) fn weighted_sum(weights: &[u32], bytes: &[u8], start: usize) -> u32 {
    weights
        .iter()
        .zip(bytes.iter().skip(start))
        .map(|(w, &b)| w * digit(b))
        .sum()
}

/// Like [`weighted_sum`], but each product contributes its cross-sum.
/// With weights alternating 1 and 2 this is the Luhn doubling step.
pub(crate) fn weighted_cross_sum(weights: &[u32], bytes: &[u8], start: usize) -> u32 {
    weights
        .iter()
        .zip(bytes.iter().skip(start))
        .map(|(w, &b)| cross_sum(w * digit(b)))
        .sum()
}

/// Running product of ISO 7064 MOD 11,10 over `bytes`.
///
/// Starts at 10 and has to be folded left to right. The check digit
/// completing the sequence is the one for which `product + check ≡ 1 (mod 10)`.
pub(crate) fn mod_11_10_product(bytes: &[u8]) -> u32 {
    bytes.iter().fold(10, |product, &b| {
        let sum = (digit(b) + product) % 10;
        let sum = if sum == 0 { 10 } else { sum };
        (sum * 2) % 11
    })
}
