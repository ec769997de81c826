//! FILENAME: core/formatter/src/spacing.rs
//! PURPOSE: Pads operators inside leaf text with single spaces.
//! CONTEXT: Most operators are already separate nodes in the tree, so this
//! pass only sees what the parser left inside a leaf: a signed number, an
//! exponent, a range, or text recovered from malformed input. String
//! literals are never touched.
//!
//! PASSES (in order):
//! 1. pad each operator with one space on both sides, unless it already
//!    touches whitespace or another comparison character
//! 2. collapse whitespace runs to a single space
//! 3. undo padding that breaks a token: unary minus, range colon, $A$1
//! 4. trim

use once_cell::sync::Lazy;
use parser::lexer::{ends_with_exponent_marker, scan_string_literal};
use regex::Regex;

/// Placeholder standing in for a string literal while the regex passes run.
/// Taken from the Private Use Area so it never collides with formula syntax.
const MASK: char = '\u{E000}';

/// Operators padded by the generic pass. Two-character forms first.
const SPACED_OPERATORS: &[&str] = &[
    "<=", ">=", "<>", "!=", "==", "=", "<", ">", "+", "-", "*", "/", "&",
];

static MULTI_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"));

static UNARY_MINUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[-+*/=<>!&,]\s*|\()\s*-\s+([0-9])").expect("valid unary minus pattern")
});

static RANGE_COLON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]+\$?[0-9]+)\s*:\s*(\$?[A-Za-z]+\$?[0-9]+)")
        .expect("valid range pattern")
});

static ABSOLUTE_COLUMN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\s*([A-Za-z]+)\s*(\$?)\s*([0-9]+)").expect("valid absolute column pattern")
});

static ABSOLUTE_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]+)\s*\$\s*([0-9]+)").expect("valid absolute row pattern")
});

/// Applies every spacing pass to `text`, leaving string literals as they were.
pub fn space_operators(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let (masked, literals) = mask_literals(text);

    let padded = pad_operators(&masked);
    let collapsed = MULTI_SPACE.replace_all(&padded, " ");
    let fixed = UNARY_MINUS.replace_all(&collapsed, "${1}-${2}");
    let fixed = RANGE_COLON.replace_all(&fixed, "${1}:${2}");
    let fixed = ABSOLUTE_COLUMN.replace_all(&fixed, "$$${1}${2}${3}");
    let fixed = ABSOLUTE_ROW.replace_all(&fixed, "${1}$$${2}");

    restore_literals(fixed.trim(), &literals)
}

/// Replaces every string literal with a single MASK character.
/// A MASK character already present in the input is recorded as a literal
/// of its own so that restoring stays positional.
fn mask_literals(text: &str) -> (String, Vec<String>) {
    let chars: Vec<char> = text.chars().collect();
    let mut masked = String::with_capacity(text.len());
    let mut literals = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        match chars[pos] {
            '"' => {
                let end = scan_string_literal(&chars, pos).end;
                literals.push(chars[pos..end].iter().collect());
                masked.push(MASK);
                pos = end;
            }
            MASK => {
                literals.push(MASK.to_string());
                masked.push(MASK);
                pos += 1;
            }
            ch => {
                masked.push(ch);
                pos += 1;
            }
        }
    }

    (masked, literals)
}

fn restore_literals(masked: &str, literals: &[String]) -> String {
    let mut restored = String::with_capacity(masked.len());
    let mut pending = literals.iter();

    for ch in masked.chars() {
        if ch != MASK {
            restored.push(ch);
            continue;
        }
        match pending.next() {
            Some(literal) => restored.push_str(literal),
            None => restored.push(ch),
        }
    }

    restored
}

/// True for characters that suppress padding when they touch an operator.
fn blocks_padding(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '<' | '>' | '=' | '!')
}

fn operator_at(chars: &[char], pos: usize) -> Option<&'static str> {
    SPACED_OPERATORS.iter().copied().find(|op| {
        op.chars()
            .enumerate()
            .all(|(offset, ch)| chars.get(pos + offset) == Some(&ch))
    })
}

/// Generic pass: one space either side of each operator that is not already
/// spaced and is not the sign of an exponent.
fn pad_operators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut pos = 0;

    while pos < chars.len() {
        let Some(op) = operator_at(&chars, pos) else {
            out.push(chars[pos]);
            pos += 1;
            continue;
        };

        let width = op.chars().count();
        let before = pos.checked_sub(1).map(|i| chars[i]);
        let after = chars.get(pos + width).copied();

        let touches_layout = before.is_some_and(blocks_padding) || after.is_some_and(blocks_padding);
        let exponent_sign = matches!(op, "+" | "-") && ends_with_exponent_marker(&out);

        if touches_layout || exponent_sign {
            out.push_str(op);
        } else {
            out.push(' ');
            out.push_str(op);
            out.push(' ');
        }
        pos += width;
    }

    out
}
