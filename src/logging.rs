//! Logging setup shared by the binaries
//!
//! Diagnostics go to stderr so stdout carries only the program's own text.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Directive applied on top of `RUST_LOG`
pub const DEFAULT_DIRECTIVE: &str = "workshops=warn";

/// Build the env filter from `RUST_LOG` plus the default directive
pub fn env_filter() -> Result<EnvFilter, ParseError> {
    Ok(EnvFilter::from_default_env().add_directive(DEFAULT_DIRECTIVE.parse()?))
}

/// Install the global tracing subscriber
pub fn init() -> Result<(), ParseError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
