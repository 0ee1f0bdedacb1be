//! Declarations generated by `enum` attributes.

use super::{BOOLEAN, UNTYPED, inflect, nilable};
use crate::descriptor::{EnumAttribute, TargetClassDescriptor};
use crate::error::UnitError;
use crate::naming;
use crate::tree::{DeclarationTree, Method, Parameter};
use crate::unit::GeneratorUnit;

const MAPPING_TYPE: &str = "T::Hash[T.any(String, Symbol), Integer]";
const WRITER_TYPE: &str = "T.any(Integer, String, Symbol)";

/// Emits enum mappings, value predicates, bang setters and value scopes.
#[derive(Debug, Clone)]
pub struct EnumUnit {
    class_name: String,
    enums: Vec<EnumAttribute>,
}

impl EnumUnit {
    /// Captures the enums of `target`.
    #[must_use]
    pub fn new(target: &TargetClassDescriptor) -> Self {
        Self {
            class_name: target.name.clone(),
            enums: target.shape.enums.clone(),
        }
    }
}

impl GeneratorUnit for EnumUnit {
    fn name(&self) -> &str {
        "active_record_enum"
    }

    fn generate(&self, tree: &mut DeclarationTree) -> Result<(), UnitError> {
        if self.enums.is_empty() {
            return Ok(());
        }
        if let Some(empty) = self.enums.iter().find(|attribute| attribute.values.is_empty()) {
            return Err(UnitError::InvalidShape(format!(
                "enum `{}` on {} declares no values",
                empty.name, self.class_name
            )));
        }

        let relation = naming::relation_class(&self.class_name);
        let mut model = tree.new_class(self.class_name.as_str(), None);
        let mut shared = tree.new_module(naming::relation_methods_module(&self.class_name));
        for attribute in &self.enums {
            let name = &attribute.name;
            model
                .create_method(
                    Method::new(inflect::pluralize(name))
                        .class_method()
                        .returns(MAPPING_TYPE),
                )
                .create_method(Method::new(name.as_str()).returns(nilable("String")))
                .create_method(
                    Method::new(format!("{name}="))
                        .param(Parameter::required("value", nilable(WRITER_TYPE))),
                );
            for value in &attribute.values {
                model
                    .create_method(Method::new(format!("{value}?")).returns(BOOLEAN))
                    .create_method(Method::new(format!("{value}!")));
                shared.create_method(
                    Method::new(value.as_str())
                        .param(Parameter::rest("args", UNTYPED))
                        .returns(relation.as_str()),
                );
            }
        }
        tree.insert(model);
        tree.insert(shared);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ModelShape;
    use crate::tree::MethodScope;

    fn widget(values: &[&str]) -> TargetClassDescriptor {
        TargetClassDescriptor::new("Widget", Some("ApplicationRecord")).with_shape(ModelShape {
            enums: vec![EnumAttribute {
                name: "status".to_owned(),
                values: values.iter().map(|value| (*value).to_owned()).collect(),
            }],
            ..ModelShape::default()
        })
    }

    #[test]
    fn enum_declares_model_and_scope_methods() {
        let mut tree = DeclarationTree::new();
        EnumUnit::new(&widget(&["draft", "live"]))
            .generate(&mut tree)
            .expect("enum has values");

        let [model, shared] = tree.nodes() else {
            panic!("expected model and shared module");
        };
        let names: Vec<&str> = model
            .members
            .iter()
            .filter_map(|member| member.as_method())
            .map(|method| method.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["statuses", "status", "status=", "draft?", "draft!", "live?", "live!"]
        );
        let mapping = model
            .members_named("statuses")
            .find_map(|member| member.as_method())
            .expect("mapping declared");
        assert_eq!(mapping.scope, MethodScope::Class);
        assert_eq!(shared.name, "Widget::RelationMethods");
        assert_eq!(shared.members.len(), 2);
    }

    #[test]
    fn enum_without_values_is_rejected() {
        let mut tree = DeclarationTree::new();
        let err = EnumUnit::new(&widget(&[]))
            .generate(&mut tree)
            .expect_err("empty enum");
        assert_eq!(
            err.to_string(),
            "invalid model shape: enum `status` on Widget declares no values"
        );
    }
}
