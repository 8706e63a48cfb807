#![deny(clippy::arithmetic_side_effects)]
//! Monkey Eval - tree-walking evaluator for the Monkey language.
//!
//! # Architecture
//!
//! - [`Object`]: runtime values, with canonical `true`/`false`/`null`
//! - [`Environment`]: name-to-object bindings
//! - [`eval`]: recursive dispatch over [`monkey_ir::Node`]
//! - [`evaluate_infix`] / [`evaluate_prefix`]: operator semantics
//! - [`RuntimeError`]: typed errors, surfaced to callers as `ERROR` objects
//! - [`Interpreter`]: a session that keeps one environment across programs
//!
//! Parsing and output formatting live outside this crate.

mod environment;
pub mod errors;
mod evaluator;
mod interpreter;
mod logging;
pub mod object;
mod operators;
mod unary_operators;

pub use environment::{Environment, SharedEnv};
pub use errors::{EvalResult, RuntimeError};
pub use evaluator::{eval, is_truthy};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use logging::init_tracing;
pub use object::{Object, ObjectKind, ObjectType, FALSE, NULL, TRUE};
pub use operators::evaluate_infix;
pub use unary_operators::evaluate_prefix;

#[cfg(test)]
mod tests;
