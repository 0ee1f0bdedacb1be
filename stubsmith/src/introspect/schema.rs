//! Introspection over a JSON snapshot of the host application's models.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Introspector;
use crate::descriptor::{
    Association, Attribute, EnumAttribute, KnownClassSet, ModelShape, TargetClassDescriptor,
};
use crate::error::{IntrospectionError, SchemaError};

/// One model as recorded in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Fully qualified class name.
    pub name: String,
    /// Runtime superclass; absent when it could not be determined.
    #[serde(default)]
    pub superclass: Option<String>,
    /// Whether the class is abstract.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Column-backed attributes. Runtime only.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Enum attributes. Runtime only.
    #[serde(default)]
    pub enums: Vec<EnumAttribute>,
    /// Named scopes declared on the class.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Associations. Runtime only.
    #[serde(default)]
    pub associations: Vec<Association>,
    /// Recorded failure to instantiate the model, if any.
    #[serde(default)]
    pub runtime_error: Option<String>,
}

/// A validated model snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Models in snapshot order.
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

impl ModelSchema {
    /// Parses and validates a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the JSON is malformed, a model name is
    /// blank or a model appears twice.
    pub fn from_json(input: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(input)?;
        schema.validate()?;
        Ok(schema)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.models.len());
        for (index, model) in self.models.iter().enumerate() {
            if model.name.trim().is_empty() {
                return Err(SchemaError::BlankName(index));
            }
            if !seen.insert(model.name.as_str()) {
                return Err(SchemaError::DuplicateModel(model.name.clone()));
            }
        }
        Ok(())
    }

    /// Model names in snapshot order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|model| model.name.as_str())
    }

    /// Looks up a model by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModelEntry> {
        self.models.iter().find(|model| model.name == name)
    }
}

/// [`Introspector`] backed by a [`ModelSchema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaIntrospector {
    schema: ModelSchema,
}

impl SchemaIntrospector {
    /// Wraps a validated schema.
    #[must_use]
    pub const fn new(schema: ModelSchema) -> Self {
        Self { schema }
    }

    /// The underlying snapshot.
    #[must_use]
    pub const fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    fn entry(&self, name: &str) -> Result<&ModelEntry, IntrospectionError> {
        self.schema
            .get(name)
            .ok_or_else(|| IntrospectionError::UnknownModel(name.to_owned()))
    }
}

impl Introspector for SchemaIntrospector {
    fn static_descriptor(&self, name: &str) -> Result<TargetClassDescriptor, IntrospectionError> {
        let entry = self.entry(name)?;
        Ok(TargetClassDescriptor {
            name: entry.name.clone(),
            superclass: entry.superclass.clone(),
            is_abstract: entry.is_abstract,
            shape: ModelShape {
                scopes: entry.scopes.clone(),
                ..ModelShape::default()
            },
        })
    }

    fn discover_runtime(
        &self,
        descriptor: &mut TargetClassDescriptor,
    ) -> Result<(), IntrospectionError> {
        let entry = self.entry(&descriptor.name)?;
        if let Some(message) = &entry.runtime_error {
            return Err(IntrospectionError::Instantiation {
                class: entry.name.clone(),
                message: message.clone(),
            });
        }
        descriptor.shape.attributes.clone_from(&entry.attributes);
        descriptor.shape.enums.clone_from(&entry.enums);
        descriptor.shape.associations.clone_from(&entry.associations);
        Ok(())
    }

    fn known_classes(&self) -> KnownClassSet {
        self.schema.model_names().collect()
    }
}
