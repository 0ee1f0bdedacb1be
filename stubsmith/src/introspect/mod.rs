//! Capturing target descriptors before a generation run.
//!
//! Discovery happens in two steps. The static step reads what is known
//! without loading the model (its identity and declared scopes); the runtime
//! step fills in members that only exist once the model is instantiated.
//! Runtime discovery may fail, in which case generation proceeds with the
//! static description alone.

mod schema;

use tracing::{debug, warn};

pub use schema::{ModelEntry, ModelSchema, SchemaIntrospector};

use crate::descriptor::{KnownClassSet, TargetClassDescriptor};
use crate::error::IntrospectionError;

/// Source of model descriptions.
pub trait Introspector {
    /// Describes `name` without instantiating it.
    ///
    /// # Errors
    ///
    /// Returns [`IntrospectionError::UnknownModel`] when `name` is not a model.
    fn static_descriptor(&self, name: &str) -> Result<TargetClassDescriptor, IntrospectionError>;

    /// Adds the members only visible at runtime to `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns an [`IntrospectionError`] when the model cannot be
    /// instantiated. Implementations may leave `descriptor` partially
    /// updated; [`introspect`] discards it in that case.
    fn discover_runtime(
        &self,
        descriptor: &mut TargetClassDescriptor,
    ) -> Result<(), IntrospectionError>;

    /// Every class name generated declarations may reference.
    fn known_classes(&self) -> KnownClassSet;
}

/// Builds the descriptor for `name`.
///
/// Abstract classes skip runtime discovery. A runtime discovery failure is
/// logged and the static descriptor is returned unchanged.
///
/// # Errors
///
/// Returns the error of [`Introspector::static_descriptor`].
pub fn introspect<I>(
    introspector: &I,
    name: &str,
) -> Result<TargetClassDescriptor, IntrospectionError>
where
    I: Introspector + ?Sized,
{
    let descriptor = introspector.static_descriptor(name)?;
    if descriptor.is_abstract {
        debug!(class = name, "abstract class; skipping runtime discovery");
        return Ok(descriptor);
    }

    let mut discovered = descriptor.clone();
    match introspector.discover_runtime(&mut discovered) {
        Ok(()) => Ok(discovered),
        Err(error) => {
            warn!(class = name, %error, "runtime discovery failed; using static description");
            Ok(descriptor)
        }
    }
}
