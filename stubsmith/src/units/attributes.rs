//! Accessors for column-backed attributes.

use super::{BOOLEAN, UNTYPED, nilable};
use crate::descriptor::{Attribute, TargetClassDescriptor};
use crate::error::UnitError;
use crate::tree::{DeclarationTree, Method, Parameter};
use crate::unit::GeneratorUnit;

/// Maps a database column type to the Ruby type of its attribute.
#[must_use]
pub fn ruby_type(column_type: &str) -> &'static str {
    match column_type.trim().to_ascii_lowercase().as_str() {
        "integer" | "bigint" | "smallint" => "Integer",
        "float" | "real" => "Float",
        "decimal" | "numeric" => "BigDecimal",
        "string" | "text" | "citext" | "uuid" | "binary" => "String",
        "boolean" => BOOLEAN,
        "date" => "Date",
        "datetime" | "timestamp" | "timestamptz" => "ActiveSupport::TimeWithZone",
        "time" => "Time",
        _ => UNTYPED,
    }
}

/// Emits a reader, a writer and a predicate per attribute.
#[derive(Debug, Clone)]
pub struct AttributeUnit {
    class_name: String,
    attributes: Vec<Attribute>,
}

impl AttributeUnit {
    /// Captures the attributes of `target`.
    #[must_use]
    pub fn new(target: &TargetClassDescriptor) -> Self {
        Self {
            class_name: target.name.clone(),
            attributes: target.shape.attributes.clone(),
        }
    }
}

impl GeneratorUnit for AttributeUnit {
    fn name(&self) -> &str {
        "active_record_attribute"
    }

    fn generate(&self, tree: &mut DeclarationTree) -> Result<(), UnitError> {
        if self.attributes.is_empty() {
            return Ok(());
        }
        let mut model = tree.new_class(self.class_name.as_str(), None);
        for attribute in &self.attributes {
            let name = attribute.name.trim();
            if name.is_empty() {
                return Err(UnitError::InvalidShape(format!(
                    "{} has an attribute without a name",
                    self.class_name
                )));
            }
            let base = ruby_type(&attribute.column_type);
            let value_type = if attribute.nullable {
                nilable(base)
            } else {
                base.to_owned()
            };
            model
                .create_method(Method::new(name).returns(value_type.as_str()))
                .create_method(
                    Method::new(format!("{name}=")).param(Parameter::required("value", value_type)),
                )
                .create_method(Method::new(format!("{name}?")).returns(BOOLEAN));
        }
        tree.insert(model);
        Ok(())
    }
}
