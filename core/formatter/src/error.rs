//! FILENAME: core/formatter/src/error.rs
//! PURPOSE: Error types for rendering and for the beautify entry point.

use parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Function node has an empty name")]
    EmptyFunctionName,

    #[error("Invalid function name: {0}")]
    InvalidFunctionName(String),

    #[error("Indent size {0} exceeds the maximum of {max}", max = crate::options::MAX_INDENT_SIZE)]
    IndentTooWide(usize),

    #[error("Indentation at depth {depth} overflows")]
    IndentOverflow { depth: usize },

    #[error("Invalid formatting options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type FormatResult<T> = Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum BeautifyError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}
