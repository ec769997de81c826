//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Character-level scanning helpers used by the recursive descent parser.
//! CONTEXT: The parser works on positions into the formula rather than on a
//! token stream, because argument lists are first split by a balanced scan
//! and then re-parsed as their own sub-expressions. The Lexer owns the
//! characters and answers the questions the parser asks at a position:
//! where does this string literal end, which operator starts here, and
//! which range is left once surrounding layout is trimmed.
//!
//! STRING LITERALS: "..." with "" as an escaped quote. An unterminated
//! literal runs to the end of the scanned range.

use crate::token::Operator;

/// Box-drawing glyphs the formatter emits as nesting connectors.
/// Inside line indentation they are read back as whitespace so formatted
/// output can be re-parsed.
const CONNECTOR_GLYPHS: [char; 4] = ['├', '└', '─', '│'];

pub struct Lexer {
    source: String,
    chars: Vec<char>,
}

/// Result of scanning a string literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct StringLiteral {
    /// Position just past the closing quote (or the end of the scanned range).
    pub end: usize,
    /// False when the input ran out before the closing quote.
    pub terminated: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            source: input.to_string(),
            chars: input.chars().collect(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn peek(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// Collects the characters in `start..end`, clamped to the input.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Scans the string literal opening at `start`, never looking past `limit`.
    pub fn read_string(&self, start: usize, limit: usize) -> StringLiteral {
        let limit = limit.min(self.chars.len());
        scan_string_literal(&self.chars[..limit], start)
    }

    /// Returns the operator starting at `pos`, never looking past `limit`.
    pub fn match_operator(&self, pos: usize, limit: usize) -> Option<Operator> {
        let limit = limit.min(self.chars.len());
        Operator::match_at(&self.chars[..limit], pos)
    }

    /// Shrinks `start..end` past surrounding whitespace and connector glyphs.
    pub fn trim_range(&self, start: usize, end: usize) -> (usize, usize) {
        let mut start = start;
        let mut end = end.min(self.chars.len());
        while start < end && self.is_layout_at(start) {
            start += 1;
        }
        while end > start && self.is_layout_at(end - 1) {
            end -= 1;
        }
        (start, end)
    }

    /// True for whitespace, and for a connector glyph that sits in the
    /// indentation of a line, i.e. only blanks and glyphs separate it from
    /// the preceding line break. A glyph anywhere else is ordinary text.
    pub fn is_layout_at(&self, pos: usize) -> bool {
        let Some(ch) = self.peek(pos) else {
            return false;
        };
        if ch.is_whitespace() {
            return true;
        }
        if !is_connector_glyph(ch) {
            return false;
        }
        for &before in self.chars[..pos].iter().rev() {
            match before {
                '\n' | '\r' => return true,
                c if c.is_whitespace() || is_connector_glyph(c) => continue,
                _ => return false,
            }
        }
        false
    }
}

/// Scans a double-quoted literal whose opening quote is at `start`.
pub fn scan_string_literal(chars: &[char], start: usize) -> StringLiteral {
    let mut pos = start + 1;
    while pos < chars.len() {
        if chars[pos] == '"' {
            // Doubled quote is an escaped quote, not the end of the literal
            if chars.get(pos + 1) == Some(&'"') {
                pos += 2;
                continue;
            }
            return StringLiteral {
                end: pos + 1,
                terminated: true,
            };
        }
        pos += 1;
    }
    StringLiteral {
        end: chars.len().max(start),
        terminated: false,
    }
}

/// Characters that may appear in a function name or reference token.
/// '.' supports dotted function names like NORM.DIST.
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.'
}

/// Characters that can continue a cell reference after a range colon.
pub fn is_reference_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '$'
}

pub fn is_connector_glyph(ch: char) -> bool {
    CONNECTOR_GLYPHS.contains(&ch)
}

/// Splits `token` into the text before its trailing identifier run and the run
/// itself, e.g. "Sheet1!SUM" yields ("Sheet1!", "SUM").
pub fn trailing_identifier(token: &str) -> (&str, &str) {
    let start = token
        .char_indices()
        .rev()
        .take_while(|(_, ch)| is_identifier_char(*ch))
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(token.len());
    token.split_at(start)
}

/// True if `text` ends in a number's exponent marker, like "1E" or "2.5e",
/// so that a following sign belongs to the number rather than being an operator.
pub fn ends_with_exponent_marker(text: &str) -> bool {
    let run_start = text
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_ascii_alphanumeric() || *ch == '.')
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let run = &text[run_start..];

    let Some(mantissa) = run.strip_suffix(['e', 'E']) else {
        return false;
    };
    let mut seen_digit = false;
    let mut seen_dot = false;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}
