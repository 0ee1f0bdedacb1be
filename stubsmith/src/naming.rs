//! Names of the scaffolding types derived from a model class.
//!
//! Every unit that references a wrapper type must go through these helpers so
//! a rename only ever happens here.

/// Suffix of the query relation wrapper class.
pub const RELATION_SUFFIX: &str = "Relation";
/// Suffix of the association relation wrapper class.
pub const ASSOCIATION_RELATION_SUFFIX: &str = "AssociationRelation";
/// Suffix of the association collection proxy wrapper class.
pub const COLLECTION_PROXY_SUFFIX: &str = "CollectionProxy";
/// Name of the module nested under the model that holds relation methods.
pub const RELATION_METHODS_MODULE: &str = "RelationMethods";

/// Query relation wrapper for `class_name`, e.g. `WidgetRelation`.
#[must_use]
pub fn relation_class(class_name: &str) -> String {
    format!("{class_name}{RELATION_SUFFIX}")
}

/// Association relation wrapper for `class_name`, e.g. `WidgetAssociationRelation`.
#[must_use]
pub fn association_relation_class(class_name: &str) -> String {
    format!("{class_name}{ASSOCIATION_RELATION_SUFFIX}")
}

/// Collection proxy wrapper for `class_name`, e.g. `WidgetCollectionProxy`.
#[must_use]
pub fn collection_proxy_class(class_name: &str) -> String {
    format!("{class_name}{COLLECTION_PROXY_SUFFIX}")
}

/// Module shared by the model and its relations, e.g. `Widget::RelationMethods`.
///
/// Methods declared here become class methods on the model (through
/// `extend`) and instance methods on each relation wrapper (through
/// `include`).
#[must_use]
pub fn relation_methods_module(class_name: &str) -> String {
    format!("{class_name}::{RELATION_METHODS_MODULE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_names_follow_suffix_convention() {
        assert_eq!(relation_class("Admin::Widget"), "Admin::WidgetRelation");
        assert_eq!(
            association_relation_class("Widget"),
            "WidgetAssociationRelation"
        );
        assert_eq!(collection_proxy_class("Widget"), "WidgetCollectionProxy");
        assert_eq!(relation_methods_module("Widget"), "Widget::RelationMethods");
    }
}
