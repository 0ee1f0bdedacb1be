//! Declarations generated by named scopes.

use super::UNTYPED;
use crate::descriptor::TargetClassDescriptor;
use crate::error::UnitError;
use crate::naming;
use crate::tree::{DeclarationTree, Method, Parameter};
use crate::unit::GeneratorUnit;

/// Emits one relation-returning method per named scope.
#[derive(Debug, Clone)]
pub struct NamedScopeUnit {
    class_name: String,
    scopes: Vec<String>,
}

impl NamedScopeUnit {
    /// Captures the scopes of `target`.
    #[must_use]
    pub fn new(target: &TargetClassDescriptor) -> Self {
        Self {
            class_name: target.name.clone(),
            scopes: target.shape.scopes.clone(),
        }
    }
}

impl GeneratorUnit for NamedScopeUnit {
    fn name(&self) -> &str {
        "active_record_named_scope"
    }

    fn generate(&self, tree: &mut DeclarationTree) -> Result<(), UnitError> {
        if self.scopes.is_empty() {
            return Ok(());
        }
        let relation = naming::relation_class(&self.class_name);
        let mut shared = tree.new_module(naming::relation_methods_module(&self.class_name));
        for scope in &self.scopes {
            shared.create_method(
                Method::new(scope.as_str())
                    .param(Parameter::rest("args", UNTYPED))
                    .returns(relation.as_str()),
            );
        }
        tree.insert(shared);
        Ok(())
    }
}
