//! Error types produced while describing and generating stubs.

use thiserror::Error;

/// Errors that abort generation for a single target class.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// The target's runtime superclass could not be determined.
    #[error("superclass unresolved for '{class}'; refusing to guess a parent class")]
    SuperclassUnresolved {
        /// Name of the class whose superclass is unknown.
        class: String,
    },
}

/// Failures raised by an individual generator unit.
///
/// The orchestrator records these as diagnostics; they never reach the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UnitError {
    /// The model shape handed to the unit cannot be described.
    #[error("invalid model shape: {0}")]
    InvalidShape(String),

    /// The unit panicked while generating.
    #[error("unit panicked: {0}")]
    Panicked(String),

    /// Any other failure reported by a unit implementation.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures reported by a model introspector.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntrospectionError {
    /// The requested class is not known to the introspector.
    #[error("model '{0}' is not known to the introspector")]
    UnknownModel(String),

    /// The model exists but its runtime members could not be discovered.
    #[error("unable to create a new instance of '{class}': {message}")]
    Instantiation {
        /// Name of the class that failed to instantiate.
        class: String,
        /// Reason reported by the runtime.
        message: String,
    },
}

/// Failures loading a model schema snapshot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// The snapshot is not valid JSON for the schema layout.
    #[error("failed to parse model schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot lists the same model twice.
    #[error("model '{0}' is declared more than once in the schema")]
    DuplicateModel(String),

    /// A model entry has an empty name.
    #[error("model entry {0} has an empty name")]
    BlankName(usize),
}
