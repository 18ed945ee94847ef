//! Token unit formatting.

use primitive_types::U256;

/// Decimals of the claimable token.
pub const TOKEN_DECIMALS: usize = 18;

/// Format a raw integer amount as a decimal string with `decimals` places.
///
/// Trailing zeros of the fraction are trimmed, keeping at least one digit, so
/// one whole token renders as `"1.0"` and zero as `"0.0"`.
pub fn format_units(value: U256, decimals: usize) -> String {
    let digits = value.to_string();
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{}.{}", whole, fraction)
}
