//! Generator units driven by a script instead of a model shape.

use std::panic;

use stubsmith::tree::{DeclarationTree, Method};
use stubsmith::unit::UnitFactory;
use stubsmith::{GeneratorUnit, KnownClassSet, TargetClassDescriptor, UnitError};

/// How a scripted unit finishes after writing its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Return `Ok(())`.
    Succeed,
    /// Return a [`UnitError::InvalidShape`] carrying the message.
    Fail(String),
    /// Panic with the message.
    Panic(String),
}

#[derive(Debug, Clone)]
struct Entry {
    namespace: String,
    is_module: bool,
    method: Method,
}

/// A unit that declares a fixed list of methods and then succeeds, fails or
/// panics.
///
/// Declarations are written before the outcome is applied, so failing units
/// leave partial output in their scratch tree.
#[derive(Debug, Clone)]
pub struct ScriptedUnit {
    name: String,
    entries: Vec<Entry>,
    outcome: Outcome,
}

impl ScriptedUnit {
    /// A unit called `name` that declares nothing and succeeds.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            outcome: Outcome::Succeed,
        }
    }

    /// Declares `method` on the class `namespace`.
    #[must_use]
    pub fn method(mut self, namespace: impl Into<String>, method: Method) -> Self {
        self.entries.push(Entry {
            namespace: namespace.into(),
            is_module: false,
            method,
        });
        self
    }

    /// Declares `method` on the module `namespace`.
    #[must_use]
    pub fn module_method(mut self, namespace: impl Into<String>, method: Method) -> Self {
        self.entries.push(Entry {
            namespace: namespace.into(),
            is_module: true,
            method,
        });
        self
    }

    /// Makes the unit return an error after declaring.
    #[must_use]
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.outcome = Outcome::Fail(message.into());
        self
    }

    /// Makes the unit panic after declaring.
    #[must_use]
    pub fn panicking(mut self, message: impl Into<String>) -> Self {
        self.outcome = Outcome::Panic(message.into());
        self
    }

    /// Factory that ignores its inputs and hands out clones of this unit.
    #[must_use]
    pub fn factory(self) -> UnitFactory {
        let factory =
            move |_: &TargetClassDescriptor, _: &KnownClassSet| -> Box<dyn GeneratorUnit> {
                Box::new(self.clone())
            };
        Box::new(factory)
    }
}

impl GeneratorUnit for ScriptedUnit {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, tree: &mut DeclarationTree) -> Result<(), UnitError> {
        for entry in &self.entries {
            let mut namespace = if entry.is_module {
                tree.new_module(entry.namespace.as_str())
            } else {
                tree.new_class(entry.namespace.as_str(), None)
            };
            namespace.create_method(entry.method.clone());
            tree.insert(namespace);
        }
        match &self.outcome {
            Outcome::Succeed => Ok(()),
            Outcome::Fail(message) => Err(UnitError::InvalidShape(message.clone())),
            Outcome::Panic(message) => panic::panic_any(message.clone()),
        }
    }
}
