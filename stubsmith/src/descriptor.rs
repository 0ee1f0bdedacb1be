//! Static descriptions of the class being generated and its neighbours.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Snapshot of the class a generation run describes.
///
/// The descriptor is captured once by an introspector before generation
/// starts and stays immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetClassDescriptor {
    /// Fully qualified class name, for example `Admin::Widget`.
    pub name: String,
    /// Name of the runtime superclass, when it could be discovered.
    #[serde(default)]
    pub superclass: Option<String>,
    /// Whether the class is abstract and cannot be instantiated.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Members discovered for the class.
    #[serde(flatten)]
    pub shape: ModelShape,
}

impl TargetClassDescriptor {
    /// Creates a descriptor with an empty model shape.
    #[must_use]
    pub fn new(name: impl Into<String>, superclass: Option<&str>) -> Self {
        Self {
            name: name.into(),
            superclass: superclass.map(str::to_owned),
            is_abstract: false,
            shape: ModelShape::default(),
        }
    }

    /// Marks the descriptor as abstract.
    #[must_use]
    pub const fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Replaces the model shape.
    #[must_use]
    pub fn with_shape(mut self, shape: ModelShape) -> Self {
        self.shape = shape;
        self
    }

    /// Returns the superclass name when it is present and not blank.
    #[must_use]
    pub fn resolved_superclass(&self) -> Option<&str> {
        self.superclass
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Members of a model known before generation starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelShape {
    /// Database-backed attributes.
    pub attributes: Vec<Attribute>,
    /// Enum attributes and their values.
    pub enums: Vec<EnumAttribute>,
    /// Named scopes declared on the class.
    pub scopes: Vec<String>,
    /// Associations to other models.
    pub associations: Vec<Association>,
}

/// A single column-backed attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Column type as reported by the database adapter (`string`, `integer`, ...).
    #[serde(rename = "type")]
    pub column_type: String,
    /// Whether the column accepts `NULL`.
    #[serde(default)]
    pub nullable: bool,
}

/// An enum attribute with its declared values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumAttribute {
    /// Attribute name, for example `status`.
    pub name: String,
    /// Declared values in declaration order.
    pub values: Vec<String>,
}

/// An association declared on the class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    /// Association name, for example `line_items`.
    pub name: String,
    /// Association macro.
    pub kind: AssociationKind,
    /// Explicit class name, when the association overrides the inferred one.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Whether the association is polymorphic.
    #[serde(default)]
    pub polymorphic: bool,
}

/// The association macros that shape generated accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    /// `belongs_to`.
    BelongsTo,
    /// `has_one`.
    HasOne,
    /// `has_many`.
    HasMany,
    /// `has_and_belongs_to_many`.
    HasAndBelongsToMany,
}

impl AssociationKind {
    /// Returns `true` when the association yields a collection.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::HasMany | Self::HasAndBelongsToMany)
    }
}

/// Class names that generated declarations may safely reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownClassSet {
    names: BTreeSet<String>,
}

impl KnownClassSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Adds a class name to the set.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Returns `true` when `name` can be referenced.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of known classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when no class is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the known class names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for KnownClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
