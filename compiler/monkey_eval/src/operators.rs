//! Infix operator semantics.
//!
//! Checks run in a fixed order:
//! 1. differing type tags are a type mismatch, whatever the operator;
//! 2. two integers get arithmetic and comparison;
//! 3. any other same-typed pair supports only `==`/`!=`, by identity;
//! 4. everything else is an unknown operator.
//!
//! Identity equality in step 3 is exact for booleans and null because only
//! the canonical singletons exist. For other same-typed pairs (two return
//! wrappers) it compares allocations, not payloads.

use monkey_ir::Operator;

use crate::errors::{division_by_zero, type_mismatch, unknown_infix_operator, RuntimeError};
use crate::object::{Object, ObjectKind};

/// Apply `operator` to two already-evaluated operands.
pub fn evaluate_infix(
    operator: Operator,
    left: &Object,
    right: &Object,
) -> Result<Object, RuntimeError> {
    let (left_type, right_type) = (left.object_type(), right.object_type());
    if left_type != right_type {
        return Err(type_mismatch(left_type, right_type));
    }

    let result = match (left.kind(), right.kind()) {
        (ObjectKind::Integer(a), ObjectKind::Integer(b)) => eval_integer_infix(operator, *a, *b)?,
        _ => match operator {
            Operator::Eq => Some(Object::boolean(left.ptr_eq(right))),
            Operator::NotEq => Some(Object::boolean(!left.ptr_eq(right))),
            _ => None,
        },
    };
    result.ok_or_else(|| unknown_infix_operator(left_type, operator, right_type))
}

/// Integer arithmetic wraps on overflow; `/` truncates toward zero.
///
/// `None` means the operator has no integer meaning.
fn eval_integer_infix(
    operator: Operator,
    a: i64,
    b: i64,
) -> Result<Option<Object>, RuntimeError> {
    let value = match operator {
        Operator::Plus => Object::integer(a.wrapping_add(b)),
        Operator::Minus => Object::integer(a.wrapping_sub(b)),
        Operator::Asterisk => Object::integer(a.wrapping_mul(b)),
        Operator::Slash => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Object::integer(a.wrapping_div(b))
        }
        Operator::Lt => Object::boolean(a < b),
        Operator::Gt => Object::boolean(a > b),
        Operator::Eq => Object::boolean(a == b),
        Operator::NotEq => Object::boolean(a != b),
        _ => return Ok(None),
    };
    Ok(Some(value))
}
