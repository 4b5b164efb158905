//! Unit converter
//!
//! Interactive Celsius/Fahrenheit and Kilometers/Miles converter on stdin/stdout.

use std::io::{stdin, stdout};

use workshops::build_info;
use workshops::cli::{ConverterSession, SessionEnd};
use workshops::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;

    build_info::print_startup_banner("unit_converter");

    let mut session = ConverterSession::new(stdin().lock(), stdout().lock());

    match session.run()? {
        SessionEnd::Exit => tracing::debug!("Session ended by user"),
        SessionEnd::EndOfInput => tracing::debug!("Session ended at end of input"),
    }

    Ok(())
}
