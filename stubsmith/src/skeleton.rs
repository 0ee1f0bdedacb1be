//! Scaffolding every target class receives regardless of its units.
//!
//! The skeleton always runs after the generator units. Because merged nodes
//! land at the position of their last occurrence, this keeps the scaffolding
//! as the trailing block of every file and keeps diffs small when units are
//! added.

use crate::descriptor::TargetClassDescriptor;
use crate::error::GenerateError;
use crate::naming;
use crate::tree::DeclarationTree;

/// Host base class of query relations.
pub const RELATION_BASE: &str = "ActiveRecord::Relation";
/// Host base class of association relations.
pub const ASSOCIATION_RELATION_BASE: &str = "ActiveRecord::AssociationRelation";
/// Host base class of association collection proxies.
pub const COLLECTION_PROXY_BASE: &str = "ActiveRecord::Associations::CollectionProxy";

const SIG: &str = "T::Sig";
const GENERIC: &str = "T::Generic";
const ELEM: &str = "Elem";

/// Emits the relation wrappers, the class stub and the shared module.
///
/// # Errors
///
/// Returns [`GenerateError::SuperclassUnresolved`] when the descriptor does
/// not name a superclass. Nothing is written in that case.
pub fn build(
    target: &TargetClassDescriptor,
    tree: &mut DeclarationTree,
) -> Result<(), GenerateError> {
    let superclass = target
        .resolved_superclass()
        .ok_or_else(|| GenerateError::SuperclassUnresolved {
            class: target.name.clone(),
        })?;
    let class_name = target.name.as_str();
    let shared_module = naming::relation_methods_module(class_name);

    for (wrapper, base) in [
        (naming::relation_class(class_name), RELATION_BASE),
        (
            naming::association_relation_class(class_name),
            ASSOCIATION_RELATION_BASE,
        ),
        (
            naming::collection_proxy_class(class_name),
            COLLECTION_PROXY_BASE,
        ),
    ] {
        let mut relation = tree.new_class(wrapper, Some(base));
        relation
            .create_include(shared_module.as_str())
            .create_extend(SIG)
            .create_extend(GENERIC)
            .create_constant(ELEM, format!("type_member(fixed: {class_name})"));
        tree.insert(relation);
    }

    let mut model = tree.new_class(class_name, Some(superclass));
    model
        .create_extend(SIG)
        .create_extend(GENERIC)
        .create_extend(shared_module.as_str())
        .create_constant(ELEM, format!("type_template(fixed: {class_name})"));
    tree.insert(model);

    // Must follow the classes that reference it (Sorbet load order).
    let mut shared = tree.new_module(shared_module);
    shared.create_extend(SIG);
    tree.insert(shared);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Provenance;

    #[test]
    fn skeleton_emits_wrappers_then_class_then_shared_module() {
        let target = TargetClassDescriptor::new("Widget", Some("ApplicationRecord"));
        let mut tree = DeclarationTree::attributed(Provenance::Skeleton);
        build(&target, &mut tree).expect("superclass is known");

        let names: Vec<&str> = tree.nodes().iter().map(|node| node.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "WidgetRelation",
                "WidgetAssociationRelation",
                "WidgetCollectionProxy",
                "Widget",
                "Widget::RelationMethods",
            ]
        );
        let model = tree.nodes().get(3).expect("model node");
        assert_eq!(model.superclass(), Some("ApplicationRecord"));
        assert!(
            tree.nodes()
                .iter()
                .all(|node| node.provenance == Provenance::Skeleton)
        );
    }

    #[test]
    fn unresolved_superclass_writes_nothing() {
        let target = TargetClassDescriptor::new("Ghost", None);
        let mut tree = DeclarationTree::attributed(Provenance::Skeleton);
        let err = build(&target, &mut tree).expect_err("superclass is missing");
        assert!(matches!(
            err,
            GenerateError::SuperclassUnresolved { ref class } if class == "Ghost"
        ));
        assert!(tree.is_empty());
    }
}
