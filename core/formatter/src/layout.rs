//! FILENAME: core/formatter/src/layout.rs
//! PURPOSE: Renders an Expression tree as indented, human-readable text.
//! CONTEXT: Rendering is a single depth-first walk. Each function call is
//! either kept on one line or broken into one argument per line; the choice
//! is made per call from the options, so nested calls decide independently.
//!
//! MULTI-LINE CALL (depth 0, nesting indicators on, indent 4):
//!
//!   IF(
//!       ├─ A1 > 100;
//!       ├─ SUM(B1:B10);
//!       └─ 0
//!   )

use parser::lexer::is_identifier_char;
use parser::{is_spaced_lexeme, Expression};

use crate::error::{FormatError, FormatResult};
use crate::logging::{log_debug, log_warn};
use crate::options::FormattingOptions;
use crate::spacing::space_operators;

/// Groups at or past this many characters are always broken over lines.
const GROUP_INLINE_LIMIT: usize = 50;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";

pub struct Formatter<'a> {
    options: &'a FormattingOptions,
    strict: bool,
}

impl<'a> Formatter<'a> {
    /// Creates a lenient formatter: a node it cannot render is emitted as its
    /// recorded source text.
    pub fn new(options: &'a FormattingOptions) -> Self {
        Formatter {
            options,
            strict: false,
        }
    }

    /// In strict mode an unrenderable node is returned as an error.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Renders the root of a parsed formula.
    pub fn format(&self, tree: &Expression) -> FormatResult<String> {
        self.options.validate()?;
        self.render(tree, 0)
    }

    fn render(&self, node: &Expression, depth: usize) -> FormatResult<String> {
        match node {
            Expression::Plain { original, children } if children.is_empty() => {
                Ok(self.leaf_text(original))
            }
            Expression::Plain { children, .. } => self.render_sequence(children, depth),
            Expression::Group { children, .. } => self.render_group(node, children, depth),
            Expression::Function { name, args, .. } => {
                match self.render_function(name, args, depth) {
                    Ok(text) => Ok(text),
                    Err(err) if !self.strict => {
                        log_warn!("FORMAT", "{}; keeping source text {:?}", err, node.original());
                        Ok(node.original().to_string())
                    }
                    Err(err) => Err(err),
                }
            }
            Expression::Operator(op) => Ok(op.as_str().to_string()),
        }
    }

    fn leaf_text(&self, original: &str) -> String {
        if self.options.use_operator_spacing {
            space_operators(original)
        } else {
            original.to_string()
        }
    }

    /// Renders siblings left to right, with one space between any pair where
    /// either side is a spaced operator.
    fn render_sequence(&self, children: &[Expression], depth: usize) -> FormatResult<String> {
        let mut out = String::new();

        for (i, child) in children.iter().enumerate() {
            out.push_str(&self.render(child, depth)?);

            if let Some(next) = children.get(i + 1) {
                if needs_spacing(child, next) {
                    out.push(' ');
                }
            }
        }

        Ok(out)
    }

    fn render_group(
        &self,
        node: &Expression,
        children: &[Expression],
        depth: usize,
    ) -> FormatResult<String> {
        let content = self.render_sequence(children, depth + 1)?;

        if !content.contains('\n')
            && content.chars().count() < GROUP_INLINE_LIMIT
            && !node.contains_function()
        {
            return Ok(format!("({})", content));
        }

        Ok(format!(
            "(\n{}{}\n{})",
            self.indent(depth + 1)?,
            content,
            self.indent(depth)?
        ))
    }

    fn render_function(&self, name: &str, args: &[Expression], depth: usize) -> FormatResult<String> {
        validate_function_name(name)?;

        if args.is_empty() {
            return Ok(format!("{}()", name));
        }

        let rendered = args
            .iter()
            .map(|arg| self.render(arg, depth + 1))
            .collect::<FormatResult<Vec<String>>>()?;

        if self.fits_inline(args, &rendered) {
            return Ok(format!("{}({})", name, rendered.join("; ")));
        }

        log_debug!("FORMAT", "{} wraps {} argument(s) at depth {}", name, args.len(), depth);

        let mut out = format!("{}(\n", name);
        let last = rendered.len() - 1;
        for (i, text) in rendered.iter().enumerate() {
            out.push_str(&self.indent(depth + 1)?);
            if self.options.use_nesting_indicators {
                out.push_str(&nesting_connector(depth + 1, i == last));
            }
            out.push_str(text);
            if i != last {
                out.push(';');
            }
            out.push('\n');
        }
        out.push_str(&self.indent(depth)?);
        out.push(')');

        Ok(out)
    }

    /// A call stays on one line when it has few enough arguments, none of
    /// them is or hides a function call, and their rendered text is short.
    fn fits_inline(&self, args: &[Expression], rendered: &[String]) -> bool {
        if args.len() > 1 && args.len() > self.options.max_inline_params {
            return false;
        }

        let has_call = args
            .iter()
            .any(|arg| arg.is_function() || (arg.is_grouping() && arg.contains_function()));
        if has_call {
            return false;
        }

        let total: usize = rendered.iter().map(|text| text.chars().count()).sum();
        total <= self.options.max_inline_length
    }

    fn indent(&self, depth: usize) -> FormatResult<String> {
        let width = self
            .options
            .indent_size
            .checked_mul(depth)
            .ok_or(FormatError::IndentOverflow { depth })?;
        Ok(" ".repeat(width))
    }
}

/// Connector drawn in front of a wrapped argument at `depth`. Deeper levels
/// are shifted right two spaces per level so the branches line up.
pub fn nesting_connector(depth: usize, is_last: bool) -> String {
    if depth == 0 {
        return String::new();
    }
    let glyph = if is_last { LAST_BRANCH } else { BRANCH };
    format!("{}{}", "  ".repeat(depth - 1), glyph)
}

/// True if a space belongs between two adjacent siblings.
fn needs_spacing(current: &Expression, next: &Expression) -> bool {
    match (current.spacing_lexeme(), next.spacing_lexeme()) {
        (Some(left), Some(right)) if left.is_empty() || right.is_empty() => false,
        (left, right) => left.is_some_and(is_spaced_lexeme) || right.is_some_and(is_spaced_lexeme),
    }
}

fn validate_function_name(name: &str) -> FormatResult<()> {
    if name.is_empty() {
        return Err(FormatError::EmptyFunctionName);
    }
    if !name.chars().all(is_identifier_char) {
        return Err(FormatError::InvalidFunctionName(name.to_string()));
    }
    Ok(())
}
