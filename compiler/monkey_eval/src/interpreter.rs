//! Evaluation session.
//!
//! An [`Interpreter`] owns one [`Environment`] across many programs, which is
//! what a line-at-a-time front end needs: `let x = 5;` on one line is visible
//! to `x * 2` on the next.

mod builder;

pub use builder::InterpreterBuilder;

use monkey_ir::{Node, Program};

use crate::environment::Environment;
use crate::evaluator::eval;
use crate::object::Object;

#[derive(Debug, Default)]
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// A session with an empty global environment.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Evaluate `program` against the session environment.
    ///
    /// Same contract as [`eval`] on a program node: a top-level `return`
    /// yields its payload, an error yields the `ERROR` object, and bindings
    /// made before either persist into the next call.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program) -> Option<Object> {
        eval(Node::Program(program), &mut self.env)
    }

    #[inline]
    pub fn environment(&self) -> &Environment {
        &self.env
    }
}
