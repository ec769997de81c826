//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the expression tree produced by the formula parser.
//! CONTEXT: The tree is layout-only. Leaves keep their exact source text so
//! literals, strings, and references survive byte-for-byte; only function
//! calls, parenthesized groups, and standalone operators get structure.
//! The formatter walks this tree and never mutates it.
//!
//! NODE KINDS:
//! - Plain: a leaf token (A1:A10, "text", 42) or a multi-part argument (A1+B1)
//! - Group: parentheses not preceded by a known function name
//! - Function: a call to a known function, arguments in source order
//! - Operator: a recognized operator standing between siblings

use crate::token::Operator;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    /// A leaf (no children) or a generic sequence of sibling nodes.
    Plain {
        original: String,
        children: Vec<Expression>,
    },

    /// Grouping parentheses, e.g. (A1+B1).
    Group {
        original: String,
        children: Vec<Expression>,
    },

    /// A known function call. The name is stored uppercased.
    Function {
        name: String,
        original: String,
        args: Vec<Expression>,
    },

    /// A standalone operator token.
    Operator(Operator),
}

impl Expression {
    /// A childless node rendered from `original`.
    pub fn leaf(original: impl Into<String>) -> Self {
        Expression::Plain {
            original: original.into(),
            children: Vec::new(),
        }
    }

    /// The trimmed source text this node was built from.
    /// For operators this is the operator lexeme.
    pub fn original(&self) -> &str {
        match self {
            Expression::Plain { original, .. }
            | Expression::Group { original, .. }
            | Expression::Function { original, .. } => original,
            Expression::Operator(op) => op.as_str(),
        }
    }

    /// Child nodes in source order. For a function these are its arguments.
    pub fn children(&self) -> &[Expression] {
        match self {
            Expression::Plain { children, .. } | Expression::Group { children, .. } => children,
            Expression::Function { args, .. } => args,
            Expression::Operator(_) => &[],
        }
    }

    /// True for a childless Plain node, the only kind rendered from `original`.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Plain { children, .. } if children.is_empty())
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Expression::Function { .. })
    }

    /// True for a Group, or a Plain node that carries children.
    pub fn is_grouping(&self) -> bool {
        match self {
            Expression::Group { .. } => true,
            Expression::Plain { children, .. } => !children.is_empty(),
            _ => false,
        }
    }

    /// True if this node is, or transitively contains, a function call.
    pub fn contains_function(&self) -> bool {
        self.is_function() || self.children().iter().any(Expression::contains_function)
    }

    /// Text this node contributes when deciding whether two siblings need a
    /// space between them. Only operators and leaves have one.
    pub fn spacing_lexeme(&self) -> Option<&str> {
        match self {
            Expression::Operator(op) => Some(op.as_str()),
            Expression::Plain { original, children } if children.is_empty() => {
                Some(original.trim())
            }
            _ => None,
        }
    }
}

fn write_sequence(f: &mut std::fmt::Formatter<'_>, children: &[Expression]) -> std::fmt::Result {
    for child in children {
        write!(f, "{}", child)?;
    }
    Ok(())
}

/// Compact source text. Arguments are always joined with ',' so trees parsed
/// from either separator convention display identically.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Plain { original, children } if children.is_empty() => {
                write!(f, "{}", original)
            }
            Expression::Plain { children, .. } => write_sequence(f, children),
            Expression::Group { children, .. } => {
                write!(f, "(")?;
                write_sequence(f, children)?;
                write!(f, ")")
            }
            Expression::Function { name, args, .. } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expression::Operator(op) => write!(f, "{}", op),
        }
    }
}
