//! Borrowed view over every node kind.
//!
//! The evaluator exposes one entry point that accepts any node. Rather than
//! erase the node types behind a trait object, `Node` is a closed enum of
//! borrows so the evaluator's dispatch stays an exhaustive `match`.

use super::expr::Expression;
use super::stmt::{BlockStatement, Program, Statement};

#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Block(&'a BlockStatement),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}
