//! Conversion error types

use thiserror::Error;

/// Errors raised while preparing a conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Invalid numeric input: {input:?}")]
    InvalidNumericInput { input: String },
}

/// Result type for conversion input handling
pub type ConvertResult<T> = Result<T, ConvertError>;
