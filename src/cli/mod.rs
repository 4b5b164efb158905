//! Interactive converter CLI
//!
//! Menu parsing and the read-eval-print loop behind the `unit_converter` binary.

pub mod menu;
pub mod session;

pub use menu::{write_menu, MenuChoice, EXIT_KEYWORD};
pub use session::{ConverterSession, FlowOutcome, SessionEnd};
