//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that structures formula text into an Expression tree.
//! CONTEXT: There is no grammar file. The parser walks characters and only
//! builds structure where the formatter needs it: known function calls,
//! grouping parentheses, and standalone operators. Everything else stays
//! as leaf text copied verbatim from the source.
//!
//! DESCENT:
//!   sequence  --> ( STRING | group | call | OPERATOR | leaf-char )*   until ')' or limit
//!   group     --> "(" sequence ")"                    when not preceded by a known name
//!   call      --> NAME "(" argument ( SEP argument )* ")"
//!   argument  --> sequence over the trimmed text between separators
//!
//! Each level returns owned children plus the position it stopped at, so the
//! tree is assembled bottom-up. Nesting depth is bounded only by the call
//! stack; pathologically deep input can exhaust it.
//!
//! RECOVERY: malformed input never aborts a lenient parse. An unclosed '('
//! runs to the end of input, a stray ')' ends structured parsing and keeps the
//! remainder as a trailing leaf, an unterminated string runs to the end.
//! In strict mode the first such fault is returned instead.

use log::{debug, error};

use crate::ast::Expression;
use crate::error::{ParseError, ParseResult};
use crate::functions;
use crate::lexer::{self, Lexer};
use crate::token::{Operator, Separator};

const LOG_TARGET: &str = "PARSE";

/// Children collected by one level of the descent.
struct Sequence {
    children: Vec<Expression>,
    /// Position of the closing ')' when `closed`, otherwise the scan limit.
    end: usize,
    closed: bool,
}

/// Trims `input` and strips a single leading '='.
/// Returns whether the '=' was present along with the remaining formula body.
pub fn strip_formula_prefix(input: &str) -> (bool, &str) {
    let trimmed = input.trim();
    match trimmed.strip_prefix('=') {
        Some(rest) => (true, rest.trim()),
        None => (false, trimmed),
    }
}

pub struct Parser {
    lexer: Lexer,
    separator: Separator,
    strict: bool,
    /// Faults recovered from during a lenient parse.
    faults: Vec<ParseError>,
}

impl Parser {
    /// Creates a lenient parser. The leading '=' is stripped and the argument
    /// separator is decided once for the whole formula.
    pub fn new(input: &str) -> Self {
        let (_, body) = strip_formula_prefix(input);
        Parser {
            lexer: Lexer::new(body),
            separator: Separator::detect(body),
            strict: false,
            faults: Vec::new(),
        }
    }

    /// In strict mode the first recoverable fault is returned as an error.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// The formula body being parsed, without the leading '='.
    pub fn source(&self) -> &str {
        self.lexer.source()
    }

    pub fn faults(&self) -> &[ParseError] {
        &self.faults
    }

    /// Parses the whole formula body into a root Plain node.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        let limit = self.lexer.len();
        let sequence = self.parse_sequence(0, limit)?;
        let children = self.finish_sequence(sequence, limit)?;

        Ok(Expression::Plain {
            original: self.lexer.source().to_string(),
            children,
        })
    }

    /// Records a recoverable fault, or returns it in strict mode.
    fn fault(&mut self, error: ParseError) -> ParseResult<()> {
        if self.strict {
            return Err(error);
        }
        if !self.faults.contains(&error) {
            debug!(target: LOG_TARGET, "Recovered from: {}", error);
            self.faults.push(error);
        }
        Ok(())
    }

    /// Turns a sequence into final children. A sequence that stopped on a
    /// ')' nobody opened keeps the unconsumed tail as a trailing leaf.
    fn finish_sequence(&mut self, sequence: Sequence, limit: usize) -> ParseResult<Vec<Expression>> {
        let Sequence {
            mut children,
            end,
            closed,
        } = sequence;

        if closed {
            self.fault(ParseError::UnmatchedCloseParenthesis { position: end })?;
            let (start, stop) = self.lexer.trim_range(end, limit);
            children.push(Expression::leaf(self.lexer.slice(start, stop)));
        }

        Ok(children)
    }

    /// Returns the position just past the string literal opening at `start`.
    fn read_string_literal(&mut self, start: usize, limit: usize) -> ParseResult<usize> {
        let literal = self.lexer.read_string(start, limit);
        if !literal.terminated {
            self.fault(ParseError::UnterminatedString { position: start })?;
        }
        Ok(literal.end)
    }

    /// Parses siblings from `start` until a ')' or `limit`.
    fn parse_sequence(&mut self, start: usize, limit: usize) -> ParseResult<Sequence> {
        let mut pending = String::new();
        let mut children = Vec::new();
        let mut pos = start;

        while pos < limit {
            let Some(ch) = self.lexer.peek(pos) else {
                break;
            };

            match ch {
                '"' => {
                    let end = self.read_string_literal(pos, limit)?;
                    pending.push_str(&self.lexer.slice(pos, end));
                    pos = end;
                }

                '(' => {
                    let (prefix, name) = lexer::trailing_identifier(&pending);

                    if let Some(canonical) = functions::canonical_name(name) {
                        let name_start = pos - name.chars().count();
                        flush_token(prefix, &mut children);
                        pending.clear();

                        let (call, next) =
                            self.parse_function_call(canonical, name_start, pos, limit)?;
                        children.push(call);
                        pos = next;
                    } else {
                        flush_token(&pending, &mut children);
                        pending.clear();

                        let (group, next) = self.parse_group(pos, limit)?;
                        children.push(group);
                        pos = next;
                    }
                }

                ')' => {
                    flush_token(&pending, &mut children);
                    return Ok(Sequence {
                        children,
                        end: pos,
                        closed: true,
                    });
                }

                ch if lexer::is_connector_glyph(ch) && self.lexer.is_layout_at(pos) => {
                    pending.push(' ');
                    pos += 1;
                }

                _ => match self.lexer.match_operator(pos, limit) {
                    Some(op) if !self.continues_token(op, pos, limit, &pending, &children) => {
                        flush_token(&pending, &mut children);
                        pending.clear();
                        children.push(Expression::Operator(op));
                        pos += op.width();
                    }
                    _ => {
                        pending.push(ch);
                        pos += 1;
                    }
                },
            }
        }

        flush_token(&pending, &mut children);
        Ok(Sequence {
            children,
            end: limit,
            closed: false,
        })
    }

    /// Decides whether an operator character belongs to the pending leaf instead
    /// of standing alone: the colon of a range (A1:B10), a sign in prefix
    /// position before a number (-5), or the sign of an exponent (1E+5).
    fn continues_token(
        &self,
        op: Operator,
        pos: usize,
        limit: usize,
        pending: &str,
        children: &[Expression],
    ) -> bool {
        let next_pos = pos + op.width();
        let next = if next_pos < limit {
            self.lexer.peek(next_pos)
        } else {
            None
        };

        match op {
            Operator::Colon => {
                !pending.trim().is_empty()
                    && !pending.ends_with(char::is_whitespace)
                    && next.is_some_and(lexer::is_reference_char)
            }
            Operator::Plus | Operator::Minus => {
                if lexer::ends_with_exponent_marker(pending) {
                    return true;
                }
                let prefix_position = pending.trim().is_empty()
                    && matches!(children.last(), None | Some(Expression::Operator(_)));
                prefix_position && next.is_some_and(|c| c.is_ascii_digit() || c == '.')
            }
            _ => false,
        }
    }

    /// Parses a grouping parenthesis opening at `open`.
    /// Returns the Group and the position after its closing ')'.
    fn parse_group(&mut self, open: usize, limit: usize) -> ParseResult<(Expression, usize)> {
        let inner = self.parse_sequence(open + 1, limit)?;

        let next = if inner.closed {
            inner.end + 1
        } else {
            self.fault(ParseError::UnclosedParenthesis { position: open })?;
            inner.end
        };

        Ok((
            Expression::Group {
                original: self.lexer.slice(open, next),
                children: inner.children,
            },
            next,
        ))
    }

    /// Parses the argument list of a known function whose '(' is at `open`.
    /// Arguments are split on the separator at paren balance zero, then each
    /// one is re-parsed on its own. Returns the call and the position after
    /// its closing ')'.
    fn parse_function_call(
        &mut self,
        name: String,
        name_start: usize,
        open: usize,
        limit: usize,
    ) -> ParseResult<(Expression, usize)> {
        if self.lexer.peek(open) != Some('(') {
            return Err(ParseError::MissingArgumentList {
                name,
                position: open,
            });
        }

        let separator = self.separator.as_char();
        let mut args = Vec::new();
        let mut arg_start = open + 1;
        let mut balance: usize = 0;
        let mut seen_separator = false;
        let mut pos = open + 1;

        while pos < limit {
            let Some(ch) = self.lexer.peek(pos) else {
                break;
            };

            match ch {
                '"' => {
                    pos = self.read_string_literal(pos, limit)?;
                    continue;
                }
                '(' => balance += 1,
                ')' if balance == 0 => {
                    // This ')' closes the call itself
                    if seen_separator || !self.is_blank(arg_start, pos) {
                        self.push_argument(&mut args, arg_start, pos)?;
                    }
                    let original = self.lexer.slice(name_start, pos + 1);
                    return Ok((Expression::Function { name, original, args }, pos + 1));
                }
                ')' => balance -= 1,
                c if c == separator && balance == 0 => {
                    self.push_argument(&mut args, arg_start, pos)?;
                    seen_separator = true;
                    arg_start = pos + 1;
                }
                _ => {}
            }

            pos += 1;
        }

        self.fault(ParseError::UnclosedParenthesis { position: open })?;
        if seen_separator || !self.is_blank(arg_start, limit) {
            self.push_argument(&mut args, arg_start, limit)?;
        }
        let original = self.lexer.slice(name_start, limit);
        Ok((Expression::Function { name, original, args }, limit))
    }

    /// Re-parses the argument text in `start..end` and attaches it: a single
    /// child directly, several children under a Plain wrapper, and nothing
    /// at all as a Plain leaf holding the trimmed text.
    fn push_argument(&mut self, args: &mut Vec<Expression>, start: usize, end: usize) -> ParseResult<()> {
        let (start, end) = self.lexer.trim_range(start, end);
        let text = self.lexer.slice(start, end);

        let sequence = self.parse_sequence(start, end)?;
        let mut children = self.finish_sequence(sequence, end)?;

        let argument = match children.len() {
            0 => Expression::leaf(text),
            1 => children.remove(0),
            _ => Expression::Plain {
                original: text,
                children,
            },
        };
        args.push(argument);
        Ok(())
    }

    fn is_blank(&self, start: usize, end: usize) -> bool {
        let (start, end) = self.lexer.trim_range(start, end);
        start == end
    }
}

/// Pushes the trimmed token as a leaf unless it is empty.
fn flush_token(token: &str, children: &mut Vec<Expression>) {
    let text = token.trim();
    if !text.is_empty() {
        children.push(Expression::leaf(text));
    }
}

/// Parses a formula into an expression tree. Never fails: if the parser hits
/// an internal fault the whole body comes back as a single leaf.
pub fn parse(input: &str) -> Expression {
    let mut parser = Parser::new(input);
    match parser.parse() {
        Ok(tree) => tree,
        Err(err) => {
            error!(target: LOG_TARGET, "Parse failed, keeping formula as raw text: {}", err);
            Expression::leaf(parser.source())
        }
    }
}

/// Parses a formula, returning the first fault instead of recovering from it.
pub fn parse_strict(input: &str) -> ParseResult<Expression> {
    Parser::new(input).strict(true).parse()
}
