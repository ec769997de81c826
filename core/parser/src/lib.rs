//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the formula parser.
//! CONTEXT: This crate turns spreadsheet formula text into a layout-oriented
//! expression tree. It does not evaluate anything; the tree exists so the
//! formatter crate can decide how to lay the formula out.
//!
//! PIPELINE: Formula String --> strip '=' --> detect separator --> Parser --> Expression tree
//!
//! SUPPORTED FEATURES:
//! - Known function calls: SUM(A1:A10), IF(A1>0, "yes", "no")
//! - Argument separators: ',' or ';' (decimal-comma locales)
//! - Grouping parentheses: (A1+B1)*2
//! - Operators: <= >= <> != == + - * / ^ & = < > :
//! - Opaque string literals with "" escapes
//! - Malformed input: unclosed '(' or '"', stray ')'

pub mod ast;
pub mod error;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod token;


pub use ast::Expression;
pub use error::{ParseError, ParseResult};
pub use functions::{canonical_name, is_known_function};
pub use lexer::Lexer;
pub use parser::{parse, parse_strict, strip_formula_prefix, Parser};
pub use token::{is_spaced_lexeme, Operator, Separator, OPERATORS};
