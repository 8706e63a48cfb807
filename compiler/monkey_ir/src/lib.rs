//! Monkey IR - syntax tree types.
//!
//! This crate holds the tree the evaluator walks:
//! - [`Program`] and [`BlockStatement`]: ordered statement sequences
//! - [`Statement`]: `let`, `return` and expression statements
//! - [`Expression`]: literals, identifiers, prefix/infix operators, `if`
//! - [`Operator`]: the closed set of operator tokens
//! - [`Node`]: a borrowed view over any of the above
//!
//! Trees are produced by a parser outside this workspace and are never
//! mutated after construction. Nothing here validates structure; a tree
//! that type-checks as Rust is considered well formed.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` on every node type.

pub mod ast;

pub use ast::{BlockStatement, Expression, Identifier, Node, Operator, Program, Statement};
