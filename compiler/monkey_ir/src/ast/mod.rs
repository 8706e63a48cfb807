//! Tree-shaped AST.
//!
//! # Module Structure
//!
//! - `expr`: expressions and identifiers
//! - `stmt`: statements, blocks and the program root
//! - `operators`: operator tokens and their source symbols
//! - `node`: the borrowed [`Node`] view used as the evaluator's entry type

mod expr;
mod node;
mod operators;
mod stmt;

pub use expr::{Expression, Identifier};
pub use node::Node;
pub use operators::Operator;
pub use stmt::{BlockStatement, Program, Statement};

#[cfg(test)]
mod tests;
