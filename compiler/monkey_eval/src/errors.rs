//! Runtime errors raised during evaluation.
//!
//! Errors travel through the evaluator as the `Err` side of [`EvalResult`],
//! so `?` gives every step the check-then-return discipline. At the public
//! boundary they become ordinary [`Object`]s of type `ERROR` carrying the
//! `Display` text below; callers never see a `RuntimeError` directly unless
//! they ask for one.
//!
//! The factory functions are the intended way to raise an error; they keep
//! the cold path out of the operator code.

use monkey_ir::Operator;

use crate::object::{Object, ObjectType};

/// Result of one evaluation step.
///
/// `Ok(None)` is the "no value" result of statements such as `let`.
pub type EvalResult = Result<Option<Object>, RuntimeError>;

/// Typed runtime error categories.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Infix operands with different type tags.
    ///
    /// The message always names `+`, whatever the operator was.
    #[error("type mismatch: {left} + {right}")]
    TypeMismatch { left: ObjectType, right: ObjectType },

    /// Prefix operator with no meaning for its operand.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: Operator,
        operand: ObjectType,
    },

    /// Infix operator with no meaning for its (same-typed) operands.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        operator: Operator,
        right: ObjectType,
    },

    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("division by zero")]
    DivisionByZero,

    /// An `ERROR` object that was already bound in the environment and got
    /// read as a value. It propagates as itself.
    #[error("{}", .0.error_message().unwrap_or_default())]
    Raised(Object),
}

impl RuntimeError {
    /// The `ERROR` object presented to callers.
    pub fn into_object(self) -> Object {
        match self {
            RuntimeError::Raised(object) => object,
            err => Object::error(err.to_string()),
        }
    }
}

impl From<RuntimeError> for Object {
    fn from(err: RuntimeError) -> Self {
        err.into_object()
    }
}

#[cold]
pub fn type_mismatch(left: ObjectType, right: ObjectType) -> RuntimeError {
    RuntimeError::TypeMismatch { left, right }
}

#[cold]
pub fn unknown_prefix_operator(operator: Operator, operand: ObjectType) -> RuntimeError {
    RuntimeError::UnknownPrefixOperator { operator, operand }
}

#[cold]
pub fn unknown_infix_operator(
    left: ObjectType,
    operator: Operator,
    right: ObjectType,
) -> RuntimeError {
    RuntimeError::UnknownInfixOperator {
        left,
        operator,
        right,
    }
}

#[cold]
pub fn identifier_not_found(name: &str) -> RuntimeError {
    RuntimeError::IdentifierNotFound {
        name: name.to_owned(),
    }
}

#[cold]
pub fn division_by_zero() -> RuntimeError {
    RuntimeError::DivisionByZero
}

#[cold]
pub fn raised(error: Object) -> RuntimeError {
    RuntimeError::Raised(error)
}
