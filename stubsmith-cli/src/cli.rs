//! Command-line interface definitions for `stubsmith`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use stubsmith::PolicyKind;

/// Collision policies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Drop every colliding declaration.
    DropAll,
    /// Keep the declaration contributed first.
    KeepFirst,
    /// Keep the declaration contributed last.
    KeepLast,
}

impl From<PolicyArg> for PolicyKind {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::DropAll => Self::DropAll,
            PolicyArg::KeepFirst => Self::KeepFirst,
            PolicyArg::KeepLast => Self::KeepLast,
        }
    }
}

/// Parsed CLI arguments for `stubsmith`.
///
/// Every setting is optional here; unset flags leave the configuration file,
/// environment and built-in defaults in charge.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "stubsmith")]
#[command(about = "Generate Sorbet RBI stubs for dynamically defined model methods")]
#[command(version)]
pub struct Args {
    /// Configuration file (defaults to `stubsmith.toml` when present).
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Model schema snapshot (JSON).
    #[arg(long, value_name = "path")]
    pub schema: Option<Utf8PathBuf>,
    /// Directory receiving one `.rbi` file per model.
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// How colliding declarations are settled.
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
    /// Parameter count at which signatures break over several lines.
    #[arg(long, value_name = "count")]
    pub break_params: Option<usize>,
    /// Default log filter, for example `debug` or `stubsmith=trace`.
    #[arg(long, value_name = "filter")]
    pub log_level: Option<String>,
    /// Print generated stubs to stdout instead of writing files.
    #[arg(long = "stdout")]
    pub should_print: bool,
    /// Models to generate; all models in the schema when omitted.
    #[arg(value_name = "MODEL")]
    pub models: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_and_models_parse() {
        let args = Args::try_parse_from([
            "stubsmith",
            "--policy",
            "keep-last",
            "--stdout",
            "Widget",
            "Admin::Part",
        ])
        .expect("arguments are valid");
        assert_eq!(args.policy, Some(PolicyArg::KeepLast));
        assert!(args.should_print);
        assert_eq!(args.models, vec!["Widget", "Admin::Part"]);
        assert_eq!(args.schema, None);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = Args::try_parse_from(["stubsmith", "--policy", "keep-all"]);
        assert!(result.is_err());
    }
}
