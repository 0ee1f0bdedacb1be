//! Layered settings for the `stubsmith` command.
//!
//! Sources merge from lowest to highest precedence: built-in defaults, the
//! configuration file, `STUBSMITH_`-prefixed environment variables, then
//! command-line flags. Flags that were not passed do not mask lower layers.

use camino::Utf8PathBuf;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use stubsmith::PolicyKind;
use stubsmith::generator::DEFAULT_REGENERATE_COMMAND;

use crate::cli::Args;
use crate::error::CliError;

/// Configuration file read from the working directory when `--config` is not
/// given.
pub const CONFIG_FILE: &str = "stubsmith.toml";
/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "STUBSMITH_";

/// Fully merged settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path of the model schema snapshot.
    pub schema: Option<Utf8PathBuf>,
    /// Directory receiving generated files.
    pub out_dir: Utf8PathBuf,
    /// Command named in each file's header; `{class}` expands to the model.
    pub regenerate_command: String,
    /// How colliding declarations are settled.
    pub policy: PolicyKind,
    /// Parameter count at which signatures break over several lines.
    pub break_params: usize,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema: None,
            out_dir: Utf8PathBuf::from("sorbet/rails-rbi/models"),
            regenerate_command: DEFAULT_REGENERATE_COMMAND.to_owned(),
            policy: PolicyKind::default(),
            break_params: 3,
            log_level: "info".to_owned(),
        }
    }
}

/// Flags that were actually passed, in the shape of [`Settings`].
#[derive(Debug, Default, Serialize)]
struct CliLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy: Option<PolicyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    break_params: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
}

impl From<&Args> for CliLayer {
    fn from(args: &Args) -> Self {
        Self {
            schema: args.schema.clone(),
            out_dir: args.out_dir.clone(),
            policy: args.policy.map(PolicyKind::from),
            break_params: args.break_params,
            log_level: args.log_level.clone(),
        }
    }
}

/// Builds the layered figment for `args` without extracting it.
#[must_use]
pub fn figment(args: &Args) -> Figment {
    let file = args
        .config
        .clone()
        .unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE));
    Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(file.as_std_path()))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(CliLayer::from(args)))
}

/// Loads the merged settings for `args`.
///
/// # Errors
///
/// Returns [`CliError::MissingConfig`] when `--config` names a missing file
/// and [`CliError::Config`] when a layer holds an invalid value.
pub fn load(args: &Args) -> Result<Settings, CliError> {
    if let Some(path) = &args.config
        && !path.is_file()
    {
        return Err(CliError::MissingConfig(path.clone()));
    }
    figment(args).extract().map_err(|err| CliError::Config(Box::new(err)))
}
