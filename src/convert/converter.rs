//! Conversion functions
//!
//! Pure formulas plus parsing of the user's numeric input.

use super::error::{ConvertError, ConvertResult};
use super::units::{FAHRENHEIT_OFFSET, MILES_PER_KM};

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

/// Convert kilometers to miles
pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers * MILES_PER_KM
}

/// Parse user input as a floating-point number
///
/// Surrounding whitespace is ignored. Besides decimal and exponent forms the
/// only words accepted are `Infinity` and `NaN`, optionally signed, spelled
/// exactly so. Everything else, including the empty string, is an
/// `InvalidNumericInput`.
pub fn parse_number(input: &str) -> ConvertResult<f64> {
    let invalid = || ConvertError::InvalidNumericInput {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic())
        && unsigned != "Infinity"
        && unsigned != "NaN"
    {
        return Err(invalid());
    }

    trimmed.parse::<f64>().map_err(|_| invalid())
}
