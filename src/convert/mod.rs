//! Unit conversion module
//!
//! Pure conversion functions and numeric input parsing for the converter loop.

pub mod converter;
pub mod error;
pub mod units;

pub use converter::{celsius_to_fahrenheit, kilometers_to_miles, parse_number};
pub use error::{ConvertError, ConvertResult};
pub use units::Conversion;
