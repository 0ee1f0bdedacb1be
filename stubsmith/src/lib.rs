//! Core engine for generating RBI stub files for dynamically shaped models.
//!
//! A generation run asks an ordered set of [`GeneratorUnit`]s to describe one
//! target class, appends their contributions into a single
//! [`DeclarationTree`], adds the [`skeleton`] scaffolding last, resolves
//! duplicate namespaces and colliding members with a [`ResolutionPolicy`], and
//! renders the result with the [`render`] module.
//!
//! ```rust
//! use stubsmith::{Generator, KnownClassSet, TargetClassDescriptor, UnitRegistry};
//!
//! let target = TargetClassDescriptor::new("Widget", Some("ApplicationRecord"));
//! let known: KnownClassSet = ["Widget"].into_iter().collect();
//! let rendered = Generator::new(UnitRegistry::standard())
//!     .generate(&target, &known)
//!     .expect("Widget has a superclass");
//! assert!(rendered.text.contains("class WidgetRelation < ActiveRecord::Relation"));
//! ```

pub mod descriptor;
pub mod diagnostic;
mod error;
pub mod generator;
pub mod introspect;
pub mod naming;
pub mod render;
pub mod resolve;
pub mod skeleton;
pub mod tree;
pub mod unit;
pub mod units;

pub use descriptor::{KnownClassSet, ModelShape, TargetClassDescriptor};
pub use diagnostic::Diagnostic;
pub use error::{GenerateError, IntrospectionError, SchemaError, UnitError};
pub use generator::{Assembly, Generator, Rendered};
pub use introspect::{Introspector, ModelSchema, SchemaIntrospector, introspect};
pub use render::{RbiRenderer, RenderConfig};
pub use resolve::{PolicyKind, ResolutionPolicy, ResolvedTree};
pub use tree::{DeclarationTree, Member, Method, Namespace, Parameter, Provenance};
pub use unit::{GeneratorUnit, UnitRegistry};
