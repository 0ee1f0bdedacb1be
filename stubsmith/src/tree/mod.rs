//! Declaration tree shared by every contributor of a generation run.
//!
//! The tree is an ordered list of namespace nodes keyed by fully qualified
//! name. Contributors only ever append: a node that several contributors
//! create under the same name is kept as several raw nodes until the
//! [`resolve`](crate::resolve) pass merges them.

mod member;

use std::fmt;

pub use member::{
    Constant, Declaration, Member, MemberKey, MemberKind, Method, MethodScope, Parameter,
    ParameterKind, Visibility,
};

/// The contributor responsible for a node or member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// A generator unit, identified by its name.
    Unit(String),
    /// The base skeleton builder.
    Skeleton,
    /// Declarations built outside any contributor, such as hand-written trees.
    Anonymous,
}

impl Provenance {
    /// Provenance for the unit called `name`.
    #[must_use]
    pub fn unit(name: impl Into<String>) -> Self {
        Self::Unit(name.into())
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(name) => f.write_str(name),
            Self::Skeleton => f.write_str("base skeleton"),
            Self::Anonymous => f.write_str("anonymous"),
        }
    }
}

/// Whether a namespace is a class or a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceKind {
    /// A class, optionally naming its superclass.
    Class {
        /// Superclass name; `None` leaves the parent to other contributors.
        superclass: Option<String>,
    },
    /// A module.
    Module,
}

/// A class or module node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a namespace is only emitted once inserted into a tree"]
pub struct Namespace {
    /// Fully qualified name.
    pub name: String,
    /// Class or module.
    pub kind: NamespaceKind,
    /// Modules extended into the namespace, in first-seen order.
    pub extends: Vec<String>,
    /// Modules included into the namespace, in first-seen order.
    pub includes: Vec<String>,
    /// Members in contribution order; names may repeat until resolution.
    pub members: Vec<Member>,
    /// Contributor that created the node.
    pub provenance: Provenance,
}

impl Namespace {
    fn new(name: impl Into<String>, kind: NamespaceKind, provenance: Provenance) -> Self {
        Self {
            name: name.into(),
            kind,
            extends: Vec::new(),
            includes: Vec::new(),
            members: Vec::new(),
            provenance,
        }
    }

    /// Superclass declared by this node, if it is a class that names one.
    #[must_use]
    pub fn superclass(&self) -> Option<&str> {
        match &self.kind {
            NamespaceKind::Class { superclass } => superclass.as_deref(),
            NamespaceKind::Module => None,
        }
    }

    /// Returns `true` for class nodes.
    #[must_use]
    pub const fn is_class(&self) -> bool {
        matches!(self.kind, NamespaceKind::Class { .. })
    }

    /// Adds `extend <module>` unless already present.
    pub fn create_extend(&mut self, module: impl Into<String>) -> &mut Self {
        push_unique(&mut self.extends, module.into());
        self
    }

    /// Adds `include <module>` unless already present.
    pub fn create_include(&mut self, module: impl Into<String>) -> &mut Self {
        push_unique(&mut self.includes, module.into());
        self
    }

    /// Declares a constant attributed to this node's contributor.
    pub fn create_constant(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.push_member(Declaration::Constant(Constant {
            name: name.into(),
            value: value.into(),
        }));
        self
    }

    /// Declares a method attributed to this node's contributor.
    pub fn create_method(&mut self, method: Method) -> &mut Self {
        self.push_member(Declaration::Method(method));
        self
    }

    /// Iterates over the member declarations named `name`.
    pub fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Member> {
        self.members.iter().filter(move |member| member.key().name == name)
    }

    fn push_member(&mut self, declaration: Declaration) {
        self.members.push(Member {
            declaration,
            provenance: self.provenance.clone(),
        });
    }
}

pub(crate) fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Append-only collection of namespace nodes.
///
/// A tree carries the provenance stamped on every node created through it.
/// The orchestrator hands each unit a fresh tree attributed to that unit and
/// appends it to the run's accumulator once the unit succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationTree {
    provenance: Provenance,
    nodes: Vec<Namespace>,
}

impl Default for DeclarationTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationTree {
    /// Creates an empty, unattributed tree.
    #[must_use]
    pub const fn new() -> Self {
        Self::attributed(Provenance::Anonymous)
    }

    /// Creates an empty tree whose nodes are attributed to `provenance`.
    #[must_use]
    pub const fn attributed(provenance: Provenance) -> Self {
        Self {
            provenance,
            nodes: Vec::new(),
        }
    }

    /// Provenance stamped on nodes created through this tree.
    #[must_use]
    pub const fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Starts a class node; call [`insert`](Self::insert) once it is filled in.
    pub fn new_class(&self, name: impl Into<String>, superclass: Option<&str>) -> Namespace {
        Namespace::new(
            name,
            NamespaceKind::Class {
                superclass: superclass.map(str::to_owned),
            },
            self.provenance.clone(),
        )
    }

    /// Starts a module node; call [`insert`](Self::insert) once it is filled in.
    pub fn new_module(&self, name: impl Into<String>) -> Namespace {
        Namespace::new(name, NamespaceKind::Module, self.provenance.clone())
    }

    /// Appends a node. Nodes sharing a name are merged during resolution.
    pub fn insert(&mut self, namespace: Namespace) {
        self.nodes.push(namespace);
    }

    /// Appends every node of `other`, preserving its order.
    pub fn append(&mut self, other: Self) {
        self.nodes.extend(other.nodes);
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Namespace] {
        &self.nodes
    }

    /// Consumes the tree, returning its nodes in insertion order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Namespace> {
        self.nodes
    }

    /// Returns `true` when nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
