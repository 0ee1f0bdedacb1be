//! Sample descriptors and schema snapshots.

use stubsmith::descriptor::{
    Association, AssociationKind, Attribute, EnumAttribute, KnownClassSet, ModelShape,
};
use stubsmith::TargetClassDescriptor;

/// Snapshot covering a plain model, a namespaced model, an abstract base, a
/// model whose runtime discovery fails and a model without a superclass.
pub const SCHEMA_JSON: &str = r#"{
  "models": [
    {
      "name": "ApplicationRecord",
      "superclass": "ActiveRecord::Base",
      "abstract": true
    },
    {
      "name": "Widget",
      "superclass": "ApplicationRecord",
      "attributes": [
        { "name": "label", "type": "string", "nullable": true },
        { "name": "size", "type": "integer" }
      ],
      "enums": [{ "name": "status", "values": ["draft", "live"] }],
      "scopes": ["recent"],
      "associations": [
        { "name": "owner", "kind": "belongs_to", "class_name": "User" },
        { "name": "parts", "kind": "has_many", "class_name": "Admin::Part" }
      ]
    },
    {
      "name": "User",
      "superclass": "ApplicationRecord",
      "attributes": [{ "name": "email", "type": "string" }]
    },
    {
      "name": "Admin::Part",
      "superclass": "ApplicationRecord",
      "associations": [{ "name": "widget", "kind": "belongs_to" }]
    },
    {
      "name": "Broken",
      "superclass": "ApplicationRecord",
      "attributes": [{ "name": "label", "type": "string" }],
      "scopes": ["visible"],
      "runtime_error": "PG::ConnectionBad"
    },
    {
      "name": "Ghost"
    }
  ]
}"#;

/// `Widget < ApplicationRecord` with an attribute, an enum, a scope and an
/// association.
#[must_use]
pub fn widget() -> TargetClassDescriptor {
    TargetClassDescriptor::new("Widget", Some("ApplicationRecord")).with_shape(ModelShape {
        attributes: vec![Attribute {
            name: "label".to_owned(),
            column_type: "string".to_owned(),
            nullable: true,
        }],
        enums: vec![EnumAttribute {
            name: "status".to_owned(),
            values: vec!["draft".to_owned(), "live".to_owned()],
        }],
        scopes: vec!["recent".to_owned()],
        associations: vec![Association {
            name: "owner".to_owned(),
            kind: AssociationKind::BelongsTo,
            class_name: Some("User".to_owned()),
            polymorphic: false,
        }],
    })
}

/// A class whose superclass cannot be determined.
#[must_use]
pub fn ghost() -> TargetClassDescriptor {
    TargetClassDescriptor::new("Ghost", None)
}

/// Classes referenced by [`widget`].
#[must_use]
pub fn known_classes() -> KnownClassSet {
    ["Widget", "User"].into_iter().collect()
}
