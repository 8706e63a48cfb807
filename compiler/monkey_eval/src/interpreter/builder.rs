//! `InterpreterBuilder` for sessions that start with predefined globals.

use super::Interpreter;
use crate::environment::Environment;
use crate::object::Object;

#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    bindings: Vec<(String, Object)>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing environment instead of an empty one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Predefine a global. Later bindings of the same name win.
    #[must_use]
    pub fn binding(mut self, name: impl Into<String>, value: Object) -> Self {
        self.bindings.push((name.into(), value));
        self
    }

    pub fn build(self) -> Interpreter {
        let mut env = self.env.unwrap_or_default();
        for (name, value) in self.bindings {
            env.set(name, value);
        }
        Interpreter { env }
    }
}
