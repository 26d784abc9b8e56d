use std::fmt;

use rpnc_stack::StackError;
use thiserror::Error;

/// Which side of a parenthesis pair is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenthesisMismatch {
    /// A `)` arrived with no `(` waiting on the stack.
    Unopened,
    /// Input ended while a `(` was still waiting on the stack.
    Unclosed,
}

impl fmt::Display for ParenthesisMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenthesisMismatch::Unopened => write!(f, "')' has no matching '('"),
            ParenthesisMismatch::Unclosed => write!(f, "'(' is never closed"),
        }
    }
}

/// Errors raised by a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Unbalanced parentheses. `position` is a character offset into the
    /// input: the offending `)` for [`ParenthesisMismatch::Unopened`], the
    /// end of input for [`ParenthesisMismatch::Unclosed`].
    #[error("mismatched parenthesis at column {column}: {kind}", column = .position + 1)]
    MismatchedParenthesis {
        kind: ParenthesisMismatch,
        position: usize,
    },

    /// The operator stack could not do its job.
    #[error(transparent)]
    Stack(#[from] StackError),
}

impl ConversionError {
    /// Character offset the error points at, when it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ConversionError::MismatchedParenthesis { position, .. } => Some(*position),
            ConversionError::Stack(_) => None,
        }
    }

    /// A short hint for the person who typed the expression.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConversionError::MismatchedParenthesis {
                kind: ParenthesisMismatch::Unopened,
                ..
            } => Some("Did you forget a matching '(' earlier?"),
            ConversionError::MismatchedParenthesis {
                kind: ParenthesisMismatch::Unclosed,
                ..
            } => Some("Add a ')' for every '(' before the end of the expression"),
            ConversionError::Stack(_) => None,
        }
    }
}

/// Render `err` against the expression it came from, with a caret under the
/// offending column.
///
/// Tabs before the caret are copied from the source so the caret stays
/// aligned; every other character is padded with one space, so wide glyphs
/// will still shift it.
pub fn render_snippet(err: &ConversionError, source: &str) -> String {
    let mut out = format!("error: {err}");
    if let Some(position) = err.position() {
        let padding: String = source
            .chars()
            .chain(std::iter::repeat(' '))
            .take(position)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        out.push_str(&format!("\n  | {source}\n  | {padding}^"));
    }
    if let Some(help) = err.help() {
        out.push_str(&format!("\n  = help: {help}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_uses_one_based_column() {
        let err = ConversionError::MismatchedParenthesis {
            kind: ParenthesisMismatch::Unopened,
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "mismatched parenthesis at column 4: ')' has no matching '('"
        );
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn stack_errors_pass_through() {
        let err = ConversionError::from(StackError::AllocationFailure { requested: 16 });
        assert_eq!(
            err.to_string(),
            StackError::AllocationFailure { requested: 16 }.to_string()
        );
        assert_eq!(err.position(), None);
        assert_eq!(err.help(), None);
    }

    #[test]
    fn snippet_points_at_the_column() {
        let err = ConversionError::MismatchedParenthesis {
            kind: ParenthesisMismatch::Unopened,
            position: 3,
        };
        assert_eq!(
            render_snippet(&err, "1+2)"),
            "error: mismatched parenthesis at column 4: ')' has no matching '('\n  \
             | 1+2)\n  |    ^\n  = help: Did you forget a matching '(' earlier?"
        );
    }

    #[test]
    fn snippet_keeps_tabs_in_the_padding() {
        let err = ConversionError::MismatchedParenthesis {
            kind: ParenthesisMismatch::Unopened,
            position: 3,
        };
        let snippet = render_snippet(&err, "1\t+)");
        assert!(snippet.contains("\n  | 1\t+)\n  |  \t ^\n"), "{snippet:?}");
    }

    #[test]
    fn snippet_pads_past_the_end_of_input() {
        let err = ConversionError::MismatchedParenthesis {
            kind: ParenthesisMismatch::Unclosed,
            position: 2,
        };
        let snippet = render_snippet(&err, "(a");
        assert!(snippet.contains("\n  | (a\n  |   ^\n"), "{snippet:?}");
    }
}
