//! Character classification and the fixed operator table.

use std::fmt;

/// Marker pushed onto the operator stack for an unmatched `(`.
pub const GROUP_MARKER: char = '(';

/// Tie-breaking rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`
    Right,
}

/// The binary operators understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Every operator, lowest precedence first.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// Look up the operator written as `symbol`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// The single character this operator is written as.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Whether `self`, already waiting on the operator stack, must be
    /// emitted before `incoming` is pushed.
    ///
    /// Equal precedence only pops for left-associative incoming operators,
    /// which is what makes `2^3^2` group to the right.
    pub fn yields_before(self, incoming: Operator) -> bool {
        let (waiting, arriving) = (self.precedence(), incoming.precedence());
        waiting > arriving
            || (waiting == arriving && incoming.associativity() == Associativity::Left)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How a single input character is treated by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Skipped
    Whitespace,
    /// Emitted immediately
    Operand(char),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Symbol {
    /// Classify one character of infix input.
    ///
    /// Anything that is not whitespace, a parenthesis or one of `+ - * / ^`
    /// is a complete single-character operand.
    pub fn classify(ch: char) -> Self {
        match ch {
            '(' => Symbol::LeftParen,
            ')' => Symbol::RightParen,
            c if c.is_whitespace() => Symbol::Whitespace,
            c => match Operator::from_symbol(c) {
                Some(op) => Symbol::Operator(op),
                None => Symbol::Operand(c),
            },
        }
    }
}

/// A token of postfix output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(char),
    Operator(Operator),
}

impl Token {
    /// The character this token prints as.
    pub fn as_char(self) -> char {
        match self {
            Token::Operand(c) => c,
            Token::Operator(op) => op.symbol(),
        }
    }

    pub fn is_operator(self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
