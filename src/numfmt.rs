//! Number formatting
//!
//! Plain decimal rendering for echoed values and totals, and the grouped
//! two-decimal form used in the price listing.

/// Magnitudes at or above this switch to scientific notation
const SCIENTIFIC_HIGH: f64 = 1e7;
/// Non-zero magnitudes below this switch to scientific notation
const SCIENTIFIC_LOW: f64 = 1e-3;

fn format_non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// Render a float in shortest round-trip form
///
/// Whole numbers keep one fractional digit (`25.0`). Magnitudes outside
/// `[1e-3, 1e7)` use an upper-case exponent (`1.0E10`, `1.5E-5`).
pub fn format_decimal(value: f64) -> String {
    if let Some(text) = format_non_finite(value) {
        return text;
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (SCIENTIFIC_LOW..SCIENTIFIC_HIGH).contains(&magnitude) {
        // Debug keeps `.0` and stays positional in this range
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}

/// Format a number with comma thousands separators and two decimals
///
/// `35000.0` becomes `35,000.00`. Non-finite values print as `Infinity`,
/// `-Infinity` or `NaN`.
pub fn format_thousands(value: f64) -> String {
    if let Some(text) = format_non_finite(value) {
        return text;
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and must not print a sign
    let sign = if value.is_sign_negative() && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
