//! Separator stripping applied before any checksum rule runs.

/// Characters people use to group the digits of a VAT number.
const SEPARATORS: [char; 4] = [' ', '.', '-', '_'];

/// Remove spaces, dots, dashes and underscores from a VAT number.
///
/// No other character is touched and case is preserved, so the result
/// is still the caller's input, only without grouping separators.
/// Normalizing an already normalized string returns it unchanged.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}
