//! Prefix operator semantics.

use monkey_ir::Operator;

use crate::errors::{unknown_prefix_operator, RuntimeError};
use crate::object::{Object, ObjectKind, FALSE, NULL};

/// Apply a prefix `operator` to an already-evaluated operand.
pub fn evaluate_prefix(operator: Operator, right: &Object) -> Result<Object, RuntimeError> {
    match operator {
        Operator::Bang => Ok(eval_bang(right)),
        Operator::Minus => eval_minus(right),
        _ => Err(unknown_prefix_operator(operator, right.object_type())),
    }
}

/// `!` flips the canonical booleans, maps `null` to `true`, and maps every
/// other object to `false` without looking at its value (`!0` is `false`).
fn eval_bang(right: &Object) -> Object {
    Object::boolean(right.ptr_eq(&FALSE) || right.ptr_eq(&NULL))
}

fn eval_minus(right: &Object) -> Result<Object, RuntimeError> {
    match right.kind() {
        // -i64::MIN wraps to itself
        ObjectKind::Integer(n) => Ok(Object::integer(n.wrapping_neg())),
        _ => Err(unknown_prefix_operator(Operator::Minus, right.object_type())),
    }
}
