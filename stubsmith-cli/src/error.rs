//! Error types for the `stubsmith` command.

use camino::Utf8PathBuf;
use stubsmith::{GenerateError, IntrospectionError, SchemaError};
use thiserror::Error;

/// Errors surfaced by the `stubsmith` command.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// A configuration file passed with `--config` does not exist.
    #[error("configuration file not found: {0}")]
    MissingConfig(Utf8PathBuf),

    /// Layered settings could not be extracted.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// No schema path was configured.
    #[error("no model schema configured; pass --schema or set `schema` in stubsmith.toml")]
    MissingSchema,

    /// The schema snapshot is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A model could not be described.
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),

    /// A model could not be generated.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// A model name cannot be mapped to an output path.
    #[error("model name '{0}' cannot be mapped to a file path")]
    InvalidModelName(String),

    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// Some targets of a batch failed; the others were written.
    #[error("{failed} of {total} models failed to generate")]
    TargetsFailed {
        /// Number of failed targets.
        failed: usize,
        /// Number of targets attempted.
        total: usize,
    },
}
