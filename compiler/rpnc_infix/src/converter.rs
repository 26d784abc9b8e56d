//! Infix to postfix conversion over a single operator stack.
//!
//! The converter scans its input once, left to right. Operands go straight
//! to the output; operators and `(` markers wait on a [`GrowableStack`]
//! until precedence, associativity or a closing `)` releases them. Nested
//! groups need no recursion because markers interleave with operators on
//! the same stack.

use std::fmt;

use rpnc_stack::GrowableStack;

use crate::error::{ConversionError, ParenthesisMismatch};
use crate::token::{Operator, Symbol, Token, GROUP_MARKER};

/// Receives each output token the moment it is finalized.
pub trait TokenSink {
    fn emit(&mut self, token: Token);
}

impl TokenSink for Vec<Token> {
    fn emit(&mut self, token: Token) {
        self.push(token);
    }
}

impl TokenSink for String {
    fn emit(&mut self, token: Token) {
        self.push(token.as_char());
    }
}

/// Tuning knobs for [`InfixConverter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConverterConfig {
    /// Capacity pre-allocated for each conversion's operator stack.
    pub initial_stack_capacity: usize,
}

/// A finished postfix expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Postfix {
    /// Tokens concatenated with no separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|token| write!(f, "{token}"))
    }
}

/// Converts infix arithmetic such as `3+4*2` into postfix such as `342*+`.
#[derive(Debug, Clone, Default)]
pub struct InfixConverter {
    config: ConverterConfig,
}

impl InfixConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert `expression` and collect the postfix tokens.
    ///
    /// Empty (or all-whitespace) input yields an empty [`Postfix`].
    pub fn convert(&self, expression: &str) -> Result<Postfix, ConversionError> {
        let mut tokens = Vec::new();
        self.convert_into(expression, &mut tokens)?;
        Ok(Postfix { tokens })
    }

    /// Convert `expression`, streaming tokens into `sink` as they are
    /// finalized. Tokens emitted before a failure stay in the sink.
    pub fn convert_into<S>(&self, expression: &str, sink: &mut S) -> Result<(), ConversionError>
    where
        S: TokenSink + ?Sized,
    {
        let mut stack = GrowableStack::with_capacity(self.config.initial_stack_capacity)?;
        self.convert_with_stack(expression, &mut stack, sink)
    }

    /// Convert `expression` using a caller-owned operator stack.
    ///
    /// The stack is cleared first, so whatever a previous conversion left
    /// behind cannot leak into this one.
    pub fn convert_with_stack<S>(
        &self,
        expression: &str,
        stack: &mut GrowableStack<char>,
        sink: &mut S,
    ) -> Result<(), ConversionError>
    where
        S: TokenSink + ?Sized,
    {
        stack.clear();
        log::debug!("converting {expression:?}");

        let mut end = 0;
        for (position, ch) in expression.chars().enumerate() {
            end = position + 1;
            match Symbol::classify(ch) {
                Symbol::Whitespace => {}
                Symbol::Operand(c) => emit(sink, Token::Operand(c)),
                Symbol::LeftParen => stack.push(GROUP_MARKER)?,
                Symbol::RightParen => close_group(stack, sink, position)?,
                Symbol::Operator(op) => {
                    release_tighter(stack, sink, op)?;
                    stack.push(op.symbol())?;
                }
            }
        }

        drain(stack, sink, end)?;
        log::debug!("finished converting {expression:?}");
        Ok(())
    }
}

/// Convert `expression` with the default configuration and return the
/// postfix text.
pub fn to_postfix(expression: &str) -> Result<String, ConversionError> {
    let mut out = String::with_capacity(expression.len());
    InfixConverter::new().convert_into(expression, &mut out)?;
    Ok(out)
}

fn emit<S: TokenSink + ?Sized>(sink: &mut S, token: Token) {
    log::trace!("emit {token}");
    sink.emit(token);
}

/// `None` for a group marker.
fn waiting_operator(entry: char) -> Option<Operator> {
    if entry == GROUP_MARKER {
        None
    } else {
        Operator::from_symbol(entry)
    }
}

/// Pop and emit everything that must precede `incoming`, stopping at a
/// group marker.
fn release_tighter<S: TokenSink + ?Sized>(
    stack: &mut GrowableStack<char>,
    sink: &mut S,
    incoming: Operator,
) -> Result<(), ConversionError> {
    while let Ok(&entry) = stack.top() {
        match waiting_operator(entry) {
            Some(waiting) if waiting.yields_before(incoming) => {
                stack.pop()?;
                emit(sink, Token::Operator(waiting));
            }
            _ => break,
        }
    }
    Ok(())
}

/// Pop and emit operators down to the nearest group marker, which is
/// discarded.
fn close_group<S: TokenSink + ?Sized>(
    stack: &mut GrowableStack<char>,
    sink: &mut S,
    position: usize,
) -> Result<(), ConversionError> {
    loop {
        let entry = *stack
            .top()
            .map_err(|_| ConversionError::MismatchedParenthesis {
                kind: ParenthesisMismatch::Unopened,
                position,
            })?;
        stack.pop()?;
        match waiting_operator(entry) {
            Some(op) => emit(sink, Token::Operator(op)),
            None => return Ok(()),
        }
    }
}

/// Emit whatever is left once input runs out. A marker still waiting
/// means a `(` was never closed.
fn drain<S: TokenSink + ?Sized>(
    stack: &mut GrowableStack<char>,
    sink: &mut S,
    end: usize,
) -> Result<(), ConversionError> {
    while let Ok(&entry) = stack.top() {
        stack.pop()?;
        match waiting_operator(entry) {
            Some(op) => emit(sink, Token::Operator(op)),
            None => {
                return Err(ConversionError::MismatchedParenthesis {
                    kind: ParenthesisMismatch::Unclosed,
                    position: end,
                })
            }
        }
    }
    Ok(())
}
