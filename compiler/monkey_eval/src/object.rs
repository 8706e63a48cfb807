//! Runtime objects produced by evaluation.
//!
//! # Canonical Singletons
//!
//! Exactly one `true`, one `false` and one `null` object exist for the
//! lifetime of the process ([`TRUE`], [`FALSE`], [`NULL`]). Every boolean or
//! null result is a clone of one of these handles, so language-level `==`
//! and `!=` on non-integers compare identity with [`Object::ptr_eq`] and
//! still agree with value equality.
//!
//! The payload constructor is private: outside this module the only way to
//! obtain a boolean is [`Object::boolean`], which cannot mint a second `true`.
//!
//! # Thread Safety
//!
//! Objects are immutable and share their payload through `Arc`, which is what
//! lets the singletons live in process-wide statics.

use std::fmt;
use std::sync::{Arc, LazyLock};

/// The canonical `true`.
pub static TRUE: LazyLock<Object> = LazyLock::new(|| Object::alloc(ObjectKind::Boolean(true)));

/// The canonical `false`.
pub static FALSE: LazyLock<Object> = LazyLock::new(|| Object::alloc(ObjectKind::Boolean(false)));

/// The canonical `null`.
pub static NULL: LazyLock<Object> = LazyLock::new(|| Object::alloc(ObjectKind::Null));

/// Type tag of an [`Object`].
///
/// Renders as the upper-case names that appear in runtime error messages.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ObjectType {
    Integer,
    Boolean,
    Null,
    ReturnValue,
    Error,
}

impl ObjectType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of an [`Object`].
#[derive(PartialEq, Eq)]
pub enum ObjectKind {
    Integer(i64),
    Boolean(bool),
    Null,
    /// Result of a `return` statement, still unwinding through blocks.
    /// The payload is `None` when the returned expression had no value.
    ReturnValue(Option<Object>),
    /// Runtime error carrying its message.
    Error(String),
}

/// A runtime value: a shared handle over an immutable [`ObjectKind`].
///
/// Cloning is a reference-count bump. `PartialEq` compares payloads and is
/// meant for hosts and tests; the evaluator's `==` uses [`Object::ptr_eq`].
#[derive(Clone, PartialEq, Eq)]
pub struct Object(Arc<ObjectKind>);

impl Object {
    #[inline]
    fn alloc(kind: ObjectKind) -> Self {
        Object(Arc::new(kind))
    }

    /// A fresh integer object.
    #[inline]
    pub fn integer(value: i64) -> Self {
        Self::alloc(ObjectKind::Integer(value))
    }

    /// The canonical [`TRUE`] or [`FALSE`].
    #[inline]
    pub fn boolean(value: bool) -> Self {
        if value {
            TRUE.clone()
        } else {
            FALSE.clone()
        }
    }

    /// The canonical [`NULL`].
    #[inline]
    pub fn null() -> Self {
        NULL.clone()
    }

    pub fn return_value(value: impl Into<Option<Object>>) -> Self {
        Self::alloc(ObjectKind::ReturnValue(value.into()))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::alloc(ObjectKind::Error(message.into()))
    }

    #[inline]
    pub fn kind(&self) -> &ObjectKind {
        &self.0
    }

    pub fn object_type(&self) -> ObjectType {
        match self.kind() {
            ObjectKind::Integer(_) => ObjectType::Integer,
            ObjectKind::Boolean(_) => ObjectType::Boolean,
            ObjectKind::Null => ObjectType::Null,
            ObjectKind::ReturnValue(_) => ObjectType::ReturnValue,
            ObjectKind::Error(_) => ObjectType::Error,
        }
    }

    /// Identity: both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.kind() {
            ObjectKind::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self.kind() {
            ObjectKind::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The message of an error object.
    pub fn error_message(&self) -> Option<&str> {
        match self.kind() {
            ObjectKind::Error(message) => Some(message),
            _ => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind(), ObjectKind::Error(_))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ObjectKind::Integer(n) => write!(f, "Integer({n})"),
            ObjectKind::Boolean(b) => write!(f, "Boolean({b})"),
            ObjectKind::Null => write!(f, "Null"),
            ObjectKind::ReturnValue(Some(inner)) => write!(f, "ReturnValue({inner:?})"),
            ObjectKind::ReturnValue(None) => write!(f, "ReturnValue(<no value>)"),
            ObjectKind::Error(message) => write!(f, "Error({message:?})"),
        }
    }
}
