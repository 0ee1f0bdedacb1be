//! Member declarations held by namespace nodes.

use std::fmt;

use super::Provenance;

/// Whether a method is declared on instances or on the class itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodScope {
    /// `def name`.
    Instance,
    /// `def self.name`.
    Class,
}

/// Method visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Callable from anywhere.
    #[default]
    Public,
    /// Callable from instances of the same class hierarchy.
    Protected,
    /// Callable only with an implicit receiver.
    Private,
}

impl Visibility {
    /// Keyword prefixed to non-public definitions.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Public => None,
            Self::Protected => Some("protected"),
            Self::Private => Some("private"),
        }
    }
}

/// How a parameter is passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Positional and mandatory.
    Required,
    /// Positional with a default expression.
    Optional {
        /// Default value expression.
        default: String,
    },
    /// Splat (`*args`).
    Rest,
    /// Keyword, optionally with a default expression.
    Keyword {
        /// Default value expression; `None` makes the keyword mandatory.
        default: Option<String>,
    },
    /// Double splat (`**opts`).
    KeywordRest,
    /// Block parameter (`&blk`).
    Block,
}

/// A single method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Parameter name without sigils.
    pub name: String,
    /// Type constraint used in the signature.
    pub constraint: String,
    /// Passing convention.
    pub kind: ParameterKind,
}

impl Parameter {
    fn with_kind(
        name: impl Into<String>,
        constraint: impl Into<String>,
        kind: ParameterKind,
    ) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
            kind,
        }
    }

    /// Mandatory positional parameter.
    #[must_use]
    pub fn required(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::with_kind(name, constraint, ParameterKind::Required)
    }

    /// Optional positional parameter with a default expression.
    #[must_use]
    pub fn optional(
        name: impl Into<String>,
        constraint: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            constraint,
            ParameterKind::Optional {
                default: default.into(),
            },
        )
    }

    /// Splat parameter; `constraint` types each element.
    #[must_use]
    pub fn rest(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::with_kind(name, constraint, ParameterKind::Rest)
    }

    /// Mandatory keyword parameter.
    #[must_use]
    pub fn keyword(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::with_kind(name, constraint, ParameterKind::Keyword { default: None })
    }

    /// Keyword parameter with a default expression.
    #[must_use]
    pub fn optional_keyword(
        name: impl Into<String>,
        constraint: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            constraint,
            ParameterKind::Keyword {
                default: Some(default.into()),
            },
        )
    }

    /// Double splat parameter.
    #[must_use]
    pub fn keyword_rest(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::with_kind(name, constraint, ParameterKind::KeywordRest)
    }

    /// Block parameter.
    #[must_use]
    pub fn block(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::with_kind(name, constraint, ParameterKind::Block)
    }
}

/// A method declaration.
///
/// Built with the chaining helpers and handed to
/// [`Namespace::create_method`](super::Namespace::create_method), which
/// records who contributed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    /// Method name, including any `?`, `!` or `=` suffix.
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Return type; `None` declares a `void` method.
    pub returns: Option<String>,
    /// Instance or class method.
    pub scope: MethodScope,
    /// Visibility.
    pub visibility: Visibility,
}

impl Method {
    /// Public instance method with no parameters returning `void`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            returns: None,
            scope: MethodScope::Instance,
            visibility: Visibility::Public,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, return_type: impl Into<String>) -> Self {
        self.returns = Some(return_type.into());
        self
    }

    /// Declares the method on the class rather than on instances.
    #[must_use]
    pub const fn class_method(mut self) -> Self {
        self.scope = MethodScope::Class;
        self
    }

    /// Sets the visibility.
    #[must_use]
    pub const fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// A constant assignment, such as `Elem = type_member(fixed: Widget)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
    /// Constant name.
    pub name: String,
    /// Assigned expression.
    pub value: String,
}

/// The content of a member, independent of who declared it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    /// A method.
    Method(Method),
    /// A constant.
    Constant(Constant),
}

/// Identity of a member within its namespace.
///
/// Instance methods, class methods and constants live in separate name
/// spaces, so `active` and `self.active` never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberKey {
    /// Which name space the member belongs to.
    pub kind: MemberKind,
    /// Member name.
    pub name: String,
}

/// Name spaces within a namespace node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Instance methods.
    InstanceMethod,
    /// Class methods.
    ClassMethod,
    /// Constants.
    Constant,
}

impl fmt::Display for MemberKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MemberKind::InstanceMethod => write!(f, "#{}", self.name),
            MemberKind::ClassMethod => write!(f, ".{}", self.name),
            MemberKind::Constant => write!(f, "::{}", self.name),
        }
    }
}

/// A declaration together with the contributor that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// What was declared.
    pub declaration: Declaration,
    /// Who declared it.
    pub provenance: Provenance,
}

impl Member {
    /// Identity used to detect collisions.
    #[must_use]
    pub fn key(&self) -> MemberKey {
        match &self.declaration {
            Declaration::Method(method) => MemberKey {
                kind: match method.scope {
                    MethodScope::Instance => MemberKind::InstanceMethod,
                    MethodScope::Class => MemberKind::ClassMethod,
                },
                name: method.name.clone(),
            },
            Declaration::Constant(constant) => MemberKey {
                kind: MemberKind::Constant,
                name: constant.name.clone(),
            },
        }
    }

    /// Returns the method declaration, if this member is one.
    #[must_use]
    pub const fn as_method(&self) -> Option<&Method> {
        match &self.declaration {
            Declaration::Method(method) => Some(method),
            Declaration::Constant(_) => None,
        }
    }

    /// Returns the constant declaration, if this member is one.
    #[must_use]
    pub const fn as_constant(&self) -> Option<&Constant> {
        match &self.declaration {
            Declaration::Constant(constant) => Some(constant),
            Declaration::Method(_) => None,
        }
    }
}
