//! Accessors generated by `belongs_to`, `has_one`, `has_many` and
//! `has_and_belongs_to_many`.

use super::{UNTYPED, inflect, nilable};
use crate::descriptor::{Association, KnownClassSet, TargetClassDescriptor};
use crate::error::UnitError;
use crate::naming;
use crate::tree::{DeclarationTree, Method, Namespace, Parameter};
use crate::unit::GeneratorUnit;

/// Emits association readers, writers, builders and id accessors.
#[derive(Debug, Clone)]
pub struct AssociationUnit {
    class_name: String,
    associations: Vec<Association>,
    known_classes: KnownClassSet,
}

impl AssociationUnit {
    /// Captures the associations of `target` and the classes they may name.
    #[must_use]
    pub fn new(target: &TargetClassDescriptor, known_classes: &KnownClassSet) -> Self {
        Self {
            class_name: target.name.clone(),
            associations: target.shape.associations.clone(),
            known_classes: known_classes.clone(),
        }
    }

    /// Class the association points at, or `None` when it cannot be named.
    fn target_class(&self, association: &Association) -> Option<String> {
        if association.polymorphic {
            return None;
        }
        let class_name = association.class_name.clone().unwrap_or_else(|| {
            if association.kind.is_collection() {
                inflect::camelize(&inflect::singularize(&association.name))
            } else {
                inflect::camelize(&association.name)
            }
        });
        self.known_classes
            .contains(&class_name)
            .then_some(class_name)
    }

    fn declare_singular(&self, model: &mut Namespace, association: &Association) {
        let name = &association.name;
        let target = self.target_class(association);
        let reader_type = target.as_deref().map_or_else(|| UNTYPED.to_owned(), nilable);
        model
            .create_method(Method::new(name.as_str()).returns(reader_type.as_str()))
            .create_method(
                Method::new(format!("{name}=")).param(Parameter::required("value", reader_type)),
            );
        if let Some(class_name) = target {
            model.create_method(
                Method::new(format!("build_{name}"))
                    .param(Parameter::rest("args", UNTYPED))
                    .returns(class_name.as_str()),
            );
            model.create_method(
                Method::new(format!("create_{name}"))
                    .param(Parameter::rest("args", UNTYPED))
                    .returns(class_name),
            );
        }
    }

    fn declare_collection(&self, model: &mut Namespace, association: &Association) {
        let name = &association.name;
        let ids = format!("{}_ids", inflect::singularize(name));
        let target = self.target_class(association);
        let (reader_type, element_type) = match target.as_deref() {
            Some(class_name) => (naming::collection_proxy_class(class_name), class_name),
            None => (UNTYPED.to_owned(), UNTYPED),
        };
        model
            .create_method(Method::new(name.as_str()).returns(reader_type))
            .create_method(Method::new(format!("{name}=")).param(Parameter::required(
                "value",
                format!("T::Enumerable[{element_type}]"),
            )))
            .create_method(Method::new(ids.as_str()).returns("T::Array[T.untyped]"))
            .create_method(
                Method::new(format!("{ids}="))
                    .param(Parameter::required("ids", "T::Array[T.untyped]")),
            );
    }
}

impl GeneratorUnit for AssociationUnit {
    fn name(&self) -> &str {
        "active_record_assoc"
    }

    fn generate(&self, tree: &mut DeclarationTree) -> Result<(), UnitError> {
        if self.associations.is_empty() {
            return Ok(());
        }
        let mut model = tree.new_class(self.class_name.as_str(), None);
        for association in &self.associations {
            if association.name.trim().is_empty() {
                return Err(UnitError::InvalidShape(format!(
                    "{} has an association without a name",
                    self.class_name
                )));
            }
            if association.kind.is_collection() {
                self.declare_collection(&mut model, association);
            } else {
                self.declare_singular(&mut model, association);
            }
        }
        tree.insert(model);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{AssociationKind, ModelShape};

    fn association(name: &str, kind: AssociationKind) -> Association {
        Association {
            name: name.to_owned(),
            kind,
            class_name: None,
            polymorphic: false,
        }
    }

    fn returns_of(tree: &DeclarationTree, name: &str) -> Option<String> {
        tree.nodes()
            .iter()
            .flat_map(|node| node.members_named(name))
            .find_map(|member| member.as_method())
            .and_then(|method| method.returns.clone())
    }

    fn generate(associations: Vec<Association>) -> DeclarationTree {
        let target = TargetClassDescriptor::new("Widget", Some("ApplicationRecord")).with_shape(
            ModelShape {
                associations,
                ..ModelShape::default()
            },
        );
        let known: KnownClassSet = ["Widget", "User", "LineItem"].into_iter().collect();
        let mut tree = DeclarationTree::new();
        AssociationUnit::new(&target, &known)
            .generate(&mut tree)
            .expect("associations are valid");
        tree
    }

    #[test]
    fn singular_associations_reference_known_classes() {
        let tree = generate(vec![association("user", AssociationKind::BelongsTo)]);
        assert_eq!(returns_of(&tree, "user").as_deref(), Some("T.nilable(User)"));
        assert_eq!(returns_of(&tree, "build_user").as_deref(), Some("User"));
    }

    #[test]
    fn collections_return_collection_proxies() {
        let tree = generate(vec![association("line_items", AssociationKind::HasMany)]);
        assert_eq!(
            returns_of(&tree, "line_items").as_deref(),
            Some("LineItemCollectionProxy")
        );
        assert_eq!(
            returns_of(&tree, "line_item_ids").as_deref(),
            Some("T::Array[T.untyped]")
        );
    }

    #[test]
    fn unknown_and_polymorphic_targets_are_untyped() {
        let mut owner = association("owner", AssociationKind::BelongsTo);
        owner.polymorphic = true;
        let tree = generate(vec![owner, association("ghosts", AssociationKind::HasMany)]);
        assert_eq!(returns_of(&tree, "owner").as_deref(), Some("T.untyped"));
        assert_eq!(returns_of(&tree, "ghosts").as_deref(), Some("T.untyped"));
        assert_eq!(returns_of(&tree, "build_owner"), None);
    }
}
