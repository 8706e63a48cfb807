//! Name-to-object binding store.
//!
//! The evaluator runs every program against a single flat [`Environment`].
//! An environment may also be created with a shared parent
//! ([`Environment::enclosed`]): lookups that miss locally continue in the
//! parent, while bindings always land locally. That is the shape function
//! scopes need; nothing in the current evaluator creates one.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::object::Object;

/// A reference-counted, single-threaded handle to an environment, used as
/// the parent link of an enclosed scope.
#[repr(transparent)]
pub struct SharedEnv(Rc<RefCell<Environment>>);

impl SharedEnv {
    pub fn new(env: Environment) -> Self {
        SharedEnv(Rc::new(RefCell::new(env)))
    }
}

impl Clone for SharedEnv {
    #[inline]
    fn clone(&self) -> Self {
        SharedEnv(Rc::clone(&self.0))
    }
}

impl Deref for SharedEnv {
    type Target = RefCell<Environment>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedEnv").field(&self.0).finish()
    }
}

/// Variable bindings for one scope.
///
/// A binding may hold no value: `let x = <expr>` where `<expr>` produced
/// nothing still binds `x`, and reading `x` back produces nothing.
#[derive(Debug, Default)]
pub struct Environment {
    store: FxHashMap<String, Option<Object>>,
    outer: Option<SharedEnv>,
}

impl Environment {
    /// An empty global scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty scope whose lookups fall back to `outer`.
    pub fn enclosed(outer: SharedEnv) -> Self {
        Environment {
            store: FxHashMap::default(),
            outer: Some(outer),
        }
    }

    /// Look up `name`, consulting enclosing scopes on a local miss.
    ///
    /// The outer `Option` is found/not found; the inner one is the bound
    /// value, `None` for a valueless binding. A miss is never an error;
    /// turning it into `identifier not found` is the evaluator's job.
    pub fn lookup(&self, name: &str) -> Option<Option<Object>> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().lookup(name))
    }

    /// The value bound to `name`, if it is bound to one.
    pub fn get(&self, name: &str) -> Option<Object> {
        self.lookup(name).flatten()
    }

    /// Bind `name` in this scope, replacing any previous local binding.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.bind(name, Some(value));
    }

    /// Like [`set`](Self::set), but the bound value may be absent.
    pub fn bind(&mut self, name: impl Into<String>, value: Option<Object>) {
        self.store.insert(name.into(), value);
    }

    /// Whether `name` resolves in this scope or an enclosing one, with or
    /// without a value.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of bindings in this scope (parents excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
