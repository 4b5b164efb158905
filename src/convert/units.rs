//! Conversion kinds and constants
//!
//! Each menu conversion knows its formula, its unit symbols and the prompt
//! shown before reading the value.

use super::converter::{celsius_to_fahrenheit, kilometers_to_miles};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Fahrenheit reading at 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
/// Miles per kilometer
pub const MILES_PER_KM: f64 = 0.621371;

/// A conversion offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    CelsiusToFahrenheit,
    KilometersToMiles,
}

impl Conversion {
    /// All conversions in menu order
    pub const ALL: [Conversion; 2] = [
        Conversion::CelsiusToFahrenheit,
        Conversion::KilometersToMiles,
    ];

    /// Menu key that selects this conversion
    pub fn menu_key(&self) -> &'static str {
        match self {
            Conversion::CelsiusToFahrenheit => "1",
            Conversion::KilometersToMiles => "2",
        }
    }

    /// Look up a conversion by its menu key
    pub fn from_menu_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.menu_key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Conversion::CelsiusToFahrenheit => "Celsius to Fahrenheit",
            Conversion::KilometersToMiles => "Kilometers to Miles",
        }
    }

    /// Prompt printed before reading the value
    pub fn prompt(&self) -> &'static str {
        match self {
            Conversion::CelsiusToFahrenheit => "Enter degrees Celsius: ",
            Conversion::KilometersToMiles => "Enter kilometers: ",
        }
    }

    pub fn source_unit(&self) -> &'static str {
        match self {
            Conversion::CelsiusToFahrenheit => "°C",
            Conversion::KilometersToMiles => "km",
        }
    }

    pub fn target_unit(&self) -> &'static str {
        match self {
            Conversion::CelsiusToFahrenheit => "°F",
            Conversion::KilometersToMiles => "miles",
        }
    }

    /// Apply the conversion formula
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Conversion::CelsiusToFahrenheit => celsius_to_fahrenheit(value),
            Conversion::KilometersToMiles => kilometers_to_miles(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keys() {
        assert_eq!(Conversion::from_menu_key("1"), Some(Conversion::CelsiusToFahrenheit));
        assert_eq!(Conversion::from_menu_key("2"), Some(Conversion::KilometersToMiles));
        assert_eq!(Conversion::from_menu_key("3"), None);
        assert_eq!(Conversion::from_menu_key("exit"), None);
    }

    #[test]
    fn test_units() {
        assert_eq!(Conversion::CelsiusToFahrenheit.source_unit(), "°C");
        assert_eq!(Conversion::CelsiusToFahrenheit.target_unit(), "°F");
        assert_eq!(Conversion::KilometersToMiles.source_unit(), "km");
        assert_eq!(Conversion::KilometersToMiles.target_unit(), "miles");
    }

    #[test]
    fn test_apply_dispatches_to_formula() {
        assert_eq!(Conversion::CelsiusToFahrenheit.apply(100.0), 212.0);
        assert!((Conversion::KilometersToMiles.apply(10.0) - 6.21371).abs() < 1e-9);
    }
}
