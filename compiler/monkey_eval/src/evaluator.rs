//! Recursive tree-walking evaluation.
//!
//! [`eval`] is the single public entry point and accepts any [`Node`].
//! Internally each step returns an [`EvalResult`]; `?` stops a step at the
//! first error, which fixes the evaluation order (an infix expression never
//! evaluates its right operand once the left one failed).
//!
//! `return` is not an error: it produces a `RETURN_VALUE` object in the
//! success channel. Blocks stop at one and hand the wrapper on unchanged;
//! only the program root unwraps it.
//!
//! A "no value" result (`Ok(None)`) stays absent through `let`, `return`,
//! `if` conditions and `!`: an absent condition is truthy, `!` of it is
//! `false`. Only `-` and infix operands read it as null.
//!
//! An `ERROR` object already bound in the environment is raised when read,
//! so it stops evaluation exactly like an error produced here.

use monkey_ir::{BlockStatement, Expression, Identifier, Node, Operator, Program, Statement};
use monkey_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::{identifier_not_found, raised, EvalResult, RuntimeError};
use crate::object::{Object, ObjectKind, FALSE, NULL};
use crate::operators::evaluate_infix;
use crate::unary_operators::evaluate_prefix;

/// Evaluate `node` against `env`.
///
/// Returns `None` for nodes that produce no value (a `let`, an empty
/// program, a block ending in a `let`). Runtime errors come back as
/// `ERROR` objects; bindings made before the error stay in `env`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn eval(node: Node<'_>, env: &mut Environment) -> Option<Object> {
    let result = match node {
        Node::Program(program) => eval_program(program, env),
        Node::Block(block) => eval_block(block, env),
        Node::Statement(stmt) => eval_statement(stmt, env),
        Node::Expression(expr) => eval_expression(expr, env),
    };
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(%err, "evaluation stopped on runtime error");
            Some(err.into_object())
        }
    }
}

/// Canonical truthiness: only `false` and `null` are falsy.
pub fn is_truthy(obj: &Object) -> bool {
    !(obj.ptr_eq(&FALSE) || obj.ptr_eq(&NULL))
}

/// Truthiness of a result that may be absent. Absence is truthy.
fn holds(value: Option<&Object>) -> bool {
    match value {
        Some(obj) => is_truthy(obj),
        None => true,
    }
}

fn eval_program(program: &Program, env: &mut Environment) -> EvalResult {
    let mut result = None;
    for stmt in &program.statements {
        result = eval_statement(stmt, env)?;
        if let Some(ObjectKind::ReturnValue(inner)) = result.as_ref().map(Object::kind) {
            return Ok(inner.clone());
        }
    }
    Ok(result)
}

fn eval_block(block: &BlockStatement, env: &mut Environment) -> EvalResult {
    let mut result = None;
    for stmt in &block.statements {
        result = eval_statement(stmt, env)?;
        if result
            .as_ref()
            .is_some_and(|obj| matches!(obj.kind(), ObjectKind::ReturnValue(_)))
        {
            break;
        }
    }
    Ok(result)
}

fn eval_statement(stmt: &Statement, env: &mut Environment) -> EvalResult {
    match stmt {
        Statement::Expression(expr) => eval_expression(expr, env),
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            tracing::trace!(name = name.as_str(), ?value, "bind");
            env.bind(name.as_str(), value);
            Ok(None)
        }
        Statement::Return(expr) => {
            let value = eval_expression(expr, env)?;
            Ok(Some(Object::return_value(value)))
        }
    }
}

fn eval_expression(expr: &Expression, env: &mut Environment) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        Expression::Integer(value) => Ok(Some(Object::integer(*value))),
        Expression::Boolean(value) => Ok(Some(Object::boolean(*value))),
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            eval_prefix(*operator, right.as_ref()).map(Some)
        }
        Expression::Infix {
            operator,
            left,
            right,
        } => {
            let left = eval_operand(left, env)?;
            let right = eval_operand(right, env)?;
            evaluate_infix(*operator, &left, &right).map(Some)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
        } => eval_if(condition, consequence, alternative.as_ref(), env),
    })
}

/// Evaluate an infix operand.
///
/// An absent result (an `if` whose taken branch ends in a `let`) reads as
/// the canonical null.
fn eval_operand(expr: &Expression, env: &mut Environment) -> Result<Object, RuntimeError> {
    Ok(eval_expression(expr, env)?.unwrap_or_else(Object::null))
}

fn eval_prefix(operator: Operator, right: Option<&Object>) -> Result<Object, RuntimeError> {
    match right {
        Some(right) => evaluate_prefix(operator, right),
        None if matches!(operator, Operator::Bang) => Ok(Object::boolean(!holds(None))),
        None => evaluate_prefix(operator, &NULL),
    }
}

fn eval_identifier(name: &Identifier, env: &Environment) -> EvalResult {
    match env.lookup(name.as_str()) {
        None => Err(identifier_not_found(name.as_str())),
        Some(Some(value)) if value.is_error() => Err(raised(value)),
        Some(value) => Ok(value),
    }
}

fn eval_if(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &mut Environment,
) -> EvalResult {
    let condition = eval_expression(condition, env)?;
    if holds(condition.as_ref()) {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Some(Object::null()))
    }
}
