//! FILENAME: core/formatter/src/lib.rs
//! PURPOSE: Library root for the formula formatter.
//! CONTEXT: Turns a parsed formula back into text laid out for reading:
//! short calls stay on one line, long or nested calls get one argument per
//! line with tree connectors, and operators get breathing room.
//!
//! PIPELINE: Formula String --> parser::parse --> Expression --> Formatter --> String
//!
//! The lenient entry points (`format`, `beautify`) never fail; they log the
//! fault and fall back to the source text. The `try_` variants report it.

pub mod error;
pub mod layout;
pub mod logging;
pub mod options;
pub mod spacing;


use parser::{strip_formula_prefix, Expression};

pub use error::{BeautifyError, FormatError, FormatResult};
pub use layout::{nesting_connector, Formatter};
pub use options::FormattingOptions;
pub use spacing::space_operators;

/// Renders a parsed formula. A node that cannot be rendered is emitted as its
/// recorded source text.
pub fn format(tree: &Expression, options: &FormattingOptions) -> String {
    match Formatter::new(options).format(tree) {
        Ok(text) => text,
        Err(err) => {
            log_error!("FORMAT", "Format failed, keeping source text: {}", err);
            tree.original().to_string()
        }
    }
}

/// Renders a parsed formula, returning the first unrenderable node as an error.
pub fn try_format(tree: &Expression, options: &FormattingOptions) -> FormatResult<String> {
    Formatter::new(options).strict(true).format(tree)
}

/// Parses and formats formula text. A leading '=' on the input is kept on the
/// output. Never fails; on an internal fault the input comes back unchanged.
pub fn beautify(formula: &str, options: &FormattingOptions) -> String {
    log_enter!("BEAUTIFY", "beautify", "{} chars", formula.chars().count());

    let (has_equals, _) = strip_formula_prefix(formula);
    let tree = parser::parse(formula);

    let result = match Formatter::new(options).format(&tree) {
        Ok(body) => with_prefix(has_equals, body),
        Err(err) => {
            log_error!("BEAUTIFY", "Beautify failed, returning input: {}", err);
            formula.to_string()
        }
    };

    log_exit!("BEAUTIFY", "beautify", "{} lines", result.lines().count());
    result
}

/// Strict counterpart of `beautify`: malformed input or an unrenderable node
/// is reported instead of recovered from.
pub fn try_beautify(formula: &str, options: &FormattingOptions) -> Result<String, BeautifyError> {
    let (has_equals, _) = strip_formula_prefix(formula);
    let tree = parser::parse_strict(formula)?;
    let body = Formatter::new(options).strict(true).format(&tree)?;
    Ok(with_prefix(has_equals, body))
}

fn with_prefix(has_equals: bool, body: String) -> String {
    if has_equals {
        format!("={}", body)
    } else {
        body
    }
}
