//! Operator tokens.
//!
//! The parser places one of these in every prefix and infix expression.
//! The set is shared between the two positions: whether an operator has
//! meaning in a given position is decided by the evaluator, which reports
//! `unknown operator` for combinations it does not define (prefix `*`,
//! infix `!`, `<` on booleans, ...).

use std::fmt;

/// Operator tokens that may appear in prefix or infix position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Logical
    Bang,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl Operator {
    /// Returns the source-level symbol for this operator.
    ///
    /// Error messages embed this text verbatim.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// Looks an operator up by its source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Asterisk,
            "/" => Self::Slash,
            "!" => Self::Bang,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
