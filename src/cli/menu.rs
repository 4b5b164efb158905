//! Converter menu

use std::io::{self, Write};

use crate::convert::Conversion;

/// Keyword that ends the converter loop
pub const EXIT_KEYWORD: &str = "exit";

/// A parsed menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Convert(Conversion),
    Exit,
    Invalid(String),
}

impl MenuChoice {
    /// Parse one line of user input
    pub fn parse(line: &str) -> Self {
        let choice = line.trim();
        if choice == EXIT_KEYWORD {
            return MenuChoice::Exit;
        }
        match Conversion::from_menu_key(choice) {
            Some(conversion) => MenuChoice::Convert(conversion),
            None => MenuChoice::Invalid(choice.to_string()),
        }
    }
}

/// Write the menu and the choice prompt (no trailing newline)
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "===== Unit Converter =====")?;
    writeln!(out, "Select the conversion you need:")?;
    for conversion in Conversion::ALL {
        writeln!(out, "{}. {}", conversion.menu_key(), conversion.title())?;
    }
    writeln!(out, "Type '{}' to quit", EXIT_KEYWORD)?;
    write!(out, "Choose (1, 2, or {}): ", EXIT_KEYWORD)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(
            MenuChoice::parse("1"),
            MenuChoice::Convert(Conversion::CelsiusToFahrenheit)
        );
        assert_eq!(
            MenuChoice::parse("2\n"),
            MenuChoice::Convert(Conversion::KilometersToMiles)
        );
        assert_eq!(MenuChoice::parse("exit"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("  exit\r\n"), MenuChoice::Exit);
        assert_eq!(
            MenuChoice::parse(" 1 "),
            MenuChoice::Convert(Conversion::CelsiusToFahrenheit)
        );
        assert_eq!(
            MenuChoice::parse("\t2\n"),
            MenuChoice::Convert(Conversion::KilometersToMiles)
        );
    }

    #[test]
    fn test_parse_invalid_choices() {
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Invalid("3".to_string()));
        assert_eq!(MenuChoice::parse("EXIT"), MenuChoice::Invalid("EXIT".to_string()));
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid(String::new()));
    }

    #[test]
    fn test_write_menu() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("===== Unit Converter =====\n"));
        assert!(text.contains("1. Celsius to Fahrenheit\n"));
        assert!(text.contains("2. Kilometers to Miles\n"));
        assert!(text.ends_with("Choose (1, 2, or exit): "));
    }
}
