//! Converter session
//!
//! Runs the menu loop over any line reader and writer. The binary wires it to
//! stdin/stdout; tests drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use super::menu::{write_menu, MenuChoice};
use crate::convert::{parse_number, Conversion, ConvertError};
use crate::numfmt::format_decimal;

/// User-facing message for an unparseable value
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input, please enter a number.";
/// User-facing message for an unknown menu choice
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice, please choose again.";

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit keyword
    Exit,
    /// Input was exhausted before the exit keyword
    EndOfInput,
}

/// Outcome of one conversion flow
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowOutcome {
    Converted { input: f64, output: f64 },
    Rejected,
    EndOfInput,
}

/// Interactive converter loop
pub struct ConverterSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConverterSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the session and return its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Loop until the exit keyword or end of input
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            write_menu(&mut self.output)?;

            let Some(line) = self.read_line()? else {
                warn!("Input closed while waiting for a menu choice");
                writeln!(self.output)?;
                return Ok(SessionEnd::EndOfInput);
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Convert(conversion) => {
                    debug!(?conversion, "Menu choice accepted");
                    if self.convert(conversion)? == FlowOutcome::EndOfInput {
                        warn!("Input closed while waiting for a value");
                        writeln!(self.output)?;
                        return Ok(SessionEnd::EndOfInput);
                    }
                }
                MenuChoice::Exit => {
                    writeln!(self.output, "Program finished.")?;
                    writeln!(self.output, "Thank you.")?;
                    self.output.flush()?;
                    return Ok(SessionEnd::Exit);
                }
                MenuChoice::Invalid(choice) => {
                    debug!(choice = %choice, "Unknown menu choice");
                    writeln!(self.output, "{}", INVALID_CHOICE_MESSAGE)?;
                }
            }

            writeln!(self.output)?;
        }
    }

    /// Run one conversion flow: prompt, parse, compute, print
    pub fn convert(&mut self, conversion: Conversion) -> io::Result<FlowOutcome> {
        write!(self.output, "{}", conversion.prompt())?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(FlowOutcome::EndOfInput);
        };

        let value = match parse_number(&line) {
            Ok(value) => value,
            Err(ConvertError::InvalidNumericInput { input }) => {
                warn!(input = %input.trim_end(), ?conversion, "Rejected non-numeric input");
                writeln!(self.output, "{}", INVALID_NUMBER_MESSAGE)?;
                return Ok(FlowOutcome::Rejected);
            }
        };

        let converted = conversion.apply(value);
        writeln!(
            self.output,
            "Result: {} {} = {:.2} {}",
            format_decimal(value),
            conversion.source_unit(),
            converted,
            conversion.target_unit()
        )?;

        Ok(FlowOutcome::Converted {
            input: value,
            output: converted,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Run a full session over the given input and return (end, transcript)
    fn run_session(input: &str) -> (SessionEnd, String) {
        let mut session = ConverterSession::new(Cursor::new(input.as_bytes()), Vec::new());
        let end = session.run().unwrap();
        let transcript = String::from_utf8(session.into_output()).unwrap();
        (end, transcript)
    }

    #[test]
    fn test_celsius_flow_then_exit() {
        let (end, transcript) = run_session("1\n25\nexit\n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(transcript.contains("Enter degrees Celsius: Result: 25.0 °C = 77.00 °F\n"));
        assert!(transcript.ends_with("Program finished.\nThank you.\n"));
        assert_eq!(transcript.matches("===== Unit Converter =====").count(), 2);
    }

    #[test]
    fn test_kilometers_flow() {
        let (_, transcript) = run_session("2\n10\nexit\n");
        assert!(transcript.contains("Result: 10.0 km = 6.21 miles\n"));
    }

    #[test]
    fn test_invalid_number_aborts_flow() {
        let (end, transcript) = run_session("1\nabc\nexit\n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(transcript.contains(INVALID_NUMBER_MESSAGE));
        assert!(!transcript.contains("Result:"));
        // Back at the menu after the rejected value
        assert_eq!(transcript.matches("===== Unit Converter =====").count(), 2);
    }

    #[test]
    fn test_invalid_kilometers_aborts_flow() {
        let (end, transcript) = run_session("2\nabc\nexit\n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(transcript.contains("Enter kilometers: Invalid input, please enter a number.\n"));
        assert!(!transcript.contains("Result:"));
        assert_eq!(transcript.matches("===== Unit Converter =====").count(), 2);
    }

    #[test]
    fn test_padded_choice_is_accepted() {
        let (end, transcript) = run_session(" 1 \n0\n exit \n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(transcript.contains("Result: 0.0 °C = 32.00 °F\n"));
        assert!(!transcript.contains(INVALID_CHOICE_MESSAGE));
    }

    #[test]
    fn test_large_value_echo_uses_exponent() {
        let (_, transcript) = run_session("2\n1e10\nexit\n");
        assert!(transcript.contains("Result: 1.0E10 km = 6213710000.00 miles\n"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (end, transcript) = run_session("7\nexit\n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(transcript.contains(INVALID_CHOICE_MESSAGE));
        assert_eq!(transcript.matches("===== Unit Converter =====").count(), 2);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (end, transcript) = run_session("2\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(!transcript.contains("Thank you."));

        let (end, _) = run_session("");
        assert_eq!(end, SessionEnd::EndOfInput);
    }

    #[test]
    fn test_convert_outcomes() {
        let mut session = ConverterSession::new(Cursor::new(&b"100\nhot\n"[..]), Vec::new());
        assert_eq!(
            session.convert(Conversion::CelsiusToFahrenheit).unwrap(),
            FlowOutcome::Converted {
                input: 100.0,
                output: 212.0
            }
        );
        assert_eq!(
            session.convert(Conversion::CelsiusToFahrenheit).unwrap(),
            FlowOutcome::Rejected
        );
        assert_eq!(
            session.convert(Conversion::KilometersToMiles).unwrap(),
            FlowOutcome::EndOfInput
        );
    }
}
