//! FILENAME: core/formatter/src/options.rs
//! PURPOSE: Layout settings for the formatter.
//! CONTEXT: The host shell hands options over as a JSON object that may set
//! only some of the fields. Missing fields fall back to the defaults, so
//! `{"indentSize": 2}` is a complete configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// Widest indent step accepted, in spaces.
pub const MAX_INDENT_SIZE: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormattingOptions {
    /// Prefix wrapped arguments with ├─ / └─ connectors.
    pub use_nesting_indicators: bool,
    /// Pad operators inside leaf text with single spaces.
    pub use_operator_spacing: bool,
    /// Spaces per nesting level.
    pub indent_size: usize,
    /// Longest argument list (in characters) a call may keep on one line.
    pub max_inline_length: usize,
    /// Most arguments a call may keep on one line.
    pub max_inline_params: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        FormattingOptions {
            use_nesting_indicators: true,
            use_operator_spacing: true,
            indent_size: 4,
            max_inline_length: 40,
            max_inline_params: 3,
        }
    }
}

impl FormattingOptions {
    /// Reads a full or partial options object.
    pub fn from_json(json: &str) -> FormatResult<Self> {
        let options: FormattingOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects settings the layout cannot honor.
    pub fn validate(&self) -> FormatResult<()> {
        if self.indent_size > MAX_INDENT_SIZE {
            return Err(FormatError::IndentTooWide(self.indent_size));
        }
        Ok(())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
