//! The generation batch behind the `stubsmith` command.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use stubsmith::{
    Generator, Introspector, KnownClassSet, ModelSchema, RenderConfig, Rendered,
    SchemaIntrospector, UnitRegistry, introspect,
};
use tracing::{error, info};

use crate::cli::Args;
use crate::config::Settings;
use crate::error::CliError;
use crate::fs_helpers;
use crate::output;

/// What a successful batch produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files written, in generation order. Empty when printing to stdout.
    pub written: Vec<Utf8PathBuf>,
    /// Models generated.
    pub generated: usize,
    /// Diagnostics reported across all models.
    pub diagnostics: usize,
}

/// Generates stubs for the models selected by `args`.
///
/// Stubs are written under the configured output directory, or to `stdout`
/// when `--stdout` was passed. A model that cannot be described, has no
/// superclass or cannot be written is logged and skipped; the batch then
/// fails once every other model has been written.
///
/// # Errors
///
/// Returns [`CliError`] when the schema cannot be loaded or stdout cannot be
/// written, and [`CliError::TargetsFailed`] when any model was skipped.
pub fn run(args: &Args, settings: &Settings, stdout: &mut dyn Write) -> Result<Summary, CliError> {
    let schema_path = settings.schema.as_deref().ok_or(CliError::MissingSchema)?;
    let schema = ModelSchema::from_json(&fs_helpers::read_to_string(schema_path)?)?;
    let targets: Vec<String> = if args.models.is_empty() {
        schema.model_names().map(str::to_owned).collect()
    } else {
        args.models.clone()
    };
    let introspector = SchemaIntrospector::new(schema);
    let known_classes = introspector.known_classes();
    let generator = Generator::new(UnitRegistry::standard())
        .with_policy(settings.policy)
        .with_render_config(RenderConfig {
            break_params: settings.break_params,
            ..RenderConfig::default()
        })
        .with_regenerate_command(settings.regenerate_command.as_str());

    info!(schema = %schema_path, models = targets.len(), "starting batch");
    let mut summary = Summary::default();
    let mut failed = 0_usize;
    for name in &targets {
        let rendered = match render_model(&generator, &introspector, &known_classes, name) {
            Ok(rendered) => rendered,
            Err(err) => {
                error!(model = %name, error = %err, "skipping model");
                failed += 1;
                continue;
            }
        };
        if args.should_print {
            stdout
                .write_all(rendered.text.as_bytes())
                .map_err(|source| CliError::Io {
                    path: Utf8PathBuf::from("<stdout>"),
                    source,
                })?;
        } else {
            match write_model(&settings.out_dir, &rendered) {
                Ok(path) => {
                    info!(model = %name, path = %path, "wrote stub");
                    summary.written.push(path);
                }
                Err(err) => {
                    error!(model = %name, error = %err, "skipping model");
                    failed += 1;
                    continue;
                }
            }
        }
        summary.diagnostics += rendered.diagnostics.len();
        summary.generated += 1;
    }

    info!(
        generated = summary.generated,
        failed,
        diagnostics = summary.diagnostics,
        "batch finished"
    );
    if failed > 0 {
        return Err(CliError::TargetsFailed {
            failed,
            total: targets.len(),
        });
    }
    Ok(summary)
}

fn render_model(
    generator: &Generator,
    introspector: &SchemaIntrospector,
    known_classes: &KnownClassSet,
    name: &str,
) -> Result<Rendered, CliError> {
    let target = introspect(introspector, name)?;
    Ok(generator.generate(&target, known_classes)?)
}

fn write_model(out_dir: &Utf8Path, rendered: &Rendered) -> Result<Utf8PathBuf, CliError> {
    let relative = output::stub_path(&rendered.class_name)?;
    output::write_stub(out_dir, &relative, &rendered.text)
}
