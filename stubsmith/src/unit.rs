//! Generator units and the ordered registry that produces them.

use std::fmt;

use crate::descriptor::{KnownClassSet, TargetClassDescriptor};
use crate::error::UnitError;
use crate::tree::DeclarationTree;
use crate::units::{AssociationUnit, AttributeUnit, EnumUnit, NamedScopeUnit, QueryingUnit};

/// An independent contributor of declarations for one concern.
///
/// Units are built from the target descriptor and the known class set, and
/// must produce the same output regardless of which other units run before
/// them. Collisions with other units are resolved later, not avoided here.
pub trait GeneratorUnit {
    /// Name recorded as the provenance of everything the unit declares.
    fn name(&self) -> &str;

    /// Appends declarations into `tree`.
    ///
    /// # Errors
    ///
    /// Returns a [`UnitError`] when the unit cannot describe the target. The
    /// orchestrator discards everything the unit wrote in that case.
    fn generate(&self, tree: &mut DeclarationTree) -> Result<(), UnitError>;
}

/// Constructor for a generator unit.
pub type UnitFactory =
    Box<dyn Fn(&TargetClassDescriptor, &KnownClassSet) -> Box<dyn GeneratorUnit> + Send + Sync>;

/// Ordered list of unit constructors.
///
/// Registration order is the execution order, which in turn fixes the merge
/// order of contributions. The registry can be shared between runs for
/// different targets.
#[derive(Default)]
pub struct UnitRegistry {
    factories: Vec<UnitFactory>,
}

impl fmt::Debug for UnitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitRegistry")
            .field("units", &self.factories.len())
            .finish()
    }
}

impl UnitRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Registry holding the standard ActiveRecord units.
    ///
    /// Order: enums, named scopes, querying, attributes, associations.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with(|target, _| Box::new(EnumUnit::new(target)))
            .with(|target, _| Box::new(NamedScopeUnit::new(target)))
            .with(|target, _| Box::new(QueryingUnit::new(target)))
            .with(|target, _| Box::new(AttributeUnit::new(target)))
            .with(|target, known| Box::new(AssociationUnit::new(target, known)))
    }

    /// Appends a factory, returning the registry for chaining.
    #[must_use]
    pub fn with<F>(mut self, factory: F) -> Self
    where
        F: Fn(&TargetClassDescriptor, &KnownClassSet) -> Box<dyn GeneratorUnit>
            + Send
            + Sync
            + 'static,
    {
        self.register(factory);
        self
    }

    /// Appends a factory.
    pub fn register<F>(&mut self, factory: F)
    where
        F: Fn(&TargetClassDescriptor, &KnownClassSet) -> Box<dyn GeneratorUnit>
            + Send
            + Sync
            + 'static,
    {
        self.factories.push(Box::new(factory));
    }

    /// Builds one unit per factory, in registration order.
    #[must_use]
    pub fn instantiate(
        &self,
        target: &TargetClassDescriptor,
        known_classes: &KnownClassSet,
    ) -> Vec<Box<dyn GeneratorUnit>> {
        self.factories
            .iter()
            .map(|factory| factory(target, known_classes))
            .collect()
    }

    /// Number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` when no factory is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_instantiates_units_in_order() {
        let target = TargetClassDescriptor::new("Widget", Some("ApplicationRecord"));
        let units = UnitRegistry::standard().instantiate(&target, &KnownClassSet::new());
        let names: Vec<&str> = units.iter().map(|unit| unit.name()).collect();
        assert_eq!(
            names,
            vec![
                "active_record_enum",
                "active_record_named_scope",
                "active_record_querying",
                "active_record_attribute",
                "active_record_assoc",
            ]
        );
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitRegistry>();
    }
}
