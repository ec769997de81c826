//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Faults the parser can recover from, or report in strict mode.
//! Positions are character offsets into the formula after the leading '=' is stripped.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Unclosed parenthesis opened at position {position}")]
    UnclosedParenthesis { position: usize },

    #[error("Unmatched closing parenthesis at position {position}")]
    UnmatchedCloseParenthesis { position: usize },

    #[error("Unterminated string literal starting at position {position}")]
    UnterminatedString { position: usize },

    #[error("Function {name} has no argument list at position {position}")]
    MissingArgumentList { name: String, position: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;
