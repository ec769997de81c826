//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Operator and argument-separator definitions for the formula scanner.
//! CONTEXT: Operators are matched against an ordered table so that the
//! two-character forms (<=, >=, <>, !=, ==) always win over their
//! one-character prefixes.

/// Operators recognized while scanning a formula.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    // Two-character comparisons
    LessEqual,    // <=
    GreaterEqual, // >=
    NotEqual,     // <>
    BangEqual,    // !=
    DoubleEqual,  // ==

    // Arithmetic
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /
    Caret,    // ^

    // String concatenation
    Ampersand, // &

    // One-character comparisons
    Equals,      // =
    LessThan,    // <
    GreaterThan, // >

    // Range
    Colon, // :
}

/// Operator lexemes in match order. Two-character forms come first.
pub const OPERATORS: &[(&str, Operator)] = &[
    ("<=", Operator::LessEqual),
    (">=", Operator::GreaterEqual),
    ("<>", Operator::NotEqual),
    ("!=", Operator::BangEqual),
    ("==", Operator::DoubleEqual),
    ("+", Operator::Plus),
    ("-", Operator::Minus),
    ("*", Operator::Asterisk),
    ("/", Operator::Slash),
    ("^", Operator::Caret),
    ("&", Operator::Ampersand),
    ("=", Operator::Equals),
    ("<", Operator::LessThan),
    (">", Operator::GreaterThan),
    (":", Operator::Colon),
];

impl Operator {
    /// The literal source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::NotEqual => "<>",
            Operator::BangEqual => "!=",
            Operator::DoubleEqual => "==",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Asterisk => "*",
            Operator::Slash => "/",
            Operator::Caret => "^",
            Operator::Ampersand => "&",
            Operator::Equals => "=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::Colon => ":",
        }
    }

    /// Number of characters the operator occupies in the source.
    pub fn width(self) -> usize {
        self.as_str().len()
    }

    /// Returns the longest operator starting at `pos`, if any.
    pub fn match_at(chars: &[char], pos: usize) -> Option<Operator> {
        OPERATORS
            .iter()
            .find(|(lexeme, _)| {
                lexeme
                    .chars()
                    .enumerate()
                    .all(|(offset, ch)| chars.get(pos + offset) == Some(&ch))
            })
            .map(|(_, op)| *op)
    }

    /// Looks up an operator by its exact lexeme.
    pub fn from_lexeme(text: &str) -> Option<Operator> {
        OPERATORS
            .iter()
            .find(|(lexeme, _)| *lexeme == text)
            .map(|(_, op)| *op)
    }

    /// True for the binary operators that get a space on either side when
    /// they sit between two sibling nodes: + - * / = < > <= >= <> &
    pub fn is_spaced(self) -> bool {
        matches!(
            self,
            Operator::Plus
                | Operator::Minus
                | Operator::Asterisk
                | Operator::Slash
                | Operator::Equals
                | Operator::LessThan
                | Operator::GreaterThan
                | Operator::LessEqual
                | Operator::GreaterEqual
                | Operator::NotEqual
                | Operator::Ampersand
        )
    }
}

/// True if `text` is exactly one of the sibling-spaced operator lexemes.
pub fn is_spaced_lexeme(text: &str) -> bool {
    Operator::from_lexeme(text).is_some_and(Operator::is_spaced)
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The character that delimits function arguments in a formula.
/// Locales that use a decimal comma separate arguments with a semicolon.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Separator {
    #[default]
    Comma,
    Semicolon,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
        }
    }

    /// Decides the separator for a whole formula: `;` if one appears outside
    /// a string literal, otherwise `,`.
    pub fn detect(text: &str) -> Separator {
        let mut in_string = false;
        for ch in text.chars() {
            match ch {
                '"' => in_string = !in_string,
                ';' if !in_string => return Separator::Semicolon,
                _ => {}
            }
        }
        Separator::Comma
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
