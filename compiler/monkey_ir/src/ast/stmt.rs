//! Statement nodes, blocks and the program root.

use super::expr::{Expression, Identifier};

/// Statement variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: Identifier, value: Expression },

    /// `return <value>;`
    Return(Expression),

    /// An expression evaluated for its value: `x + 1;`
    Expression(Expression),
}

impl Statement {
    pub fn let_binding(name: impl Into<String>, value: Expression) -> Self {
        Statement::Let {
            name: Identifier::new(name),
            value,
        }
    }

    pub fn ret(value: Expression) -> Self {
        Statement::Return(value)
    }
}

impl From<Expression> for Statement {
    fn from(expr: Expression) -> Self {
        Statement::Expression(expr)
    }
}

/// Braced statement sequence: the branches of an `if`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

impl From<Expression> for BlockStatement {
    /// Single-expression block: `{ 10 }`.
    fn from(expr: Expression) -> Self {
        BlockStatement::new(vec![Statement::Expression(expr)])
    }
}

/// Root of a parsed source text.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
