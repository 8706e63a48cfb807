//! Expression nodes.

use std::fmt;

use super::operators::Operator;
use super::stmt::BlockStatement;

/// A bare name: a variable reference or the target of a `let`.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    /// Variable reference: `x`
    Identifier(Identifier),

    /// Integer literal: `42`
    Integer(i64),

    /// Boolean literal: `true`, `false`
    Boolean(bool),

    /// Prefix operator: `-x`, `!ok`
    Prefix {
        operator: Operator,
        right: Box<Expression>,
    },

    /// Infix operator: `a + b`, `a == b`
    Infix {
        operator: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Conditional: `if (c) { ... } else { ... }`
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
}

// Constructors for building trees without a parser.
impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn int(value: i64) -> Self {
        Expression::Integer(value)
    }

    pub fn bool(value: bool) -> Self {
        Expression::Boolean(value)
    }

    pub fn prefix(operator: Operator, right: Expression) -> Self {
        Expression::Prefix {
            operator,
            right: Box::new(right),
        }
    }

    pub fn infix(left: Expression, operator: Operator, right: Expression) -> Self {
        Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `if` without an `else` branch.
    pub fn if_then(condition: Expression, consequence: BlockStatement) -> Self {
        Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative: None,
        }
    }

    pub fn if_else(
        condition: Expression,
        consequence: BlockStatement,
        alternative: BlockStatement,
    ) -> Self {
        Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative: Some(alternative),
        }
    }
}
