//! Orchestration of one generation run.
//!
//! The generator owns the unit registry, the resolution policy and the render
//! settings. A run isolates every unit behind its own scratch tree so that a
//! failure (an `Err` or a panic) discards exactly that unit's contribution.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::descriptor::{KnownClassSet, TargetClassDescriptor};
use crate::diagnostic::Diagnostic;
use crate::error::{GenerateError, UnitError};
use crate::render::{RbiRenderer, RenderConfig};
use crate::resolve::{PolicyKind, ResolutionPolicy, ResolvedTree, resolve};
use crate::skeleton;
use crate::tree::{DeclarationTree, Provenance};
use crate::unit::{GeneratorUnit, UnitRegistry};

/// Default regeneration command written into the header.
pub const DEFAULT_REGENERATE_COMMAND: &str = "rake rails_rbi:models[{class}]";

/// Resolved declarations for one target, before rendering.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Tree after conflict resolution.
    pub tree: ResolvedTree,
    /// Unit failures, dropped collisions and superclass disagreements.
    pub diagnostics: Vec<Diagnostic>,
}

/// Final output for one target class.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Name of the generated class.
    pub class_name: String,
    /// Header followed by the rendered tree.
    pub text: String,
    /// Everything worth reporting about the run. Never affects `text`.
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs units, the skeleton, the resolver and the renderer for a target.
#[derive(Debug)]
pub struct Generator<P = PolicyKind> {
    registry: UnitRegistry,
    policy: P,
    renderer: RbiRenderer,
    regenerate_command: String,
}

impl Generator<PolicyKind> {
    /// Creates a generator with the default policy and render settings.
    #[must_use]
    pub fn new(registry: UnitRegistry) -> Self {
        Self {
            registry,
            policy: PolicyKind::default(),
            renderer: RbiRenderer::default(),
            regenerate_command: DEFAULT_REGENERATE_COMMAND.to_owned(),
        }
    }
}

impl<P: ResolutionPolicy> Generator<P> {
    /// Replaces the resolution policy.
    #[must_use]
    pub fn with_policy<Q: ResolutionPolicy>(self, policy: Q) -> Generator<Q> {
        Generator {
            registry: self.registry,
            policy,
            renderer: self.renderer,
            regenerate_command: self.regenerate_command,
        }
    }

    /// Replaces the render settings.
    #[must_use]
    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.renderer = RbiRenderer::new(config);
        self
    }

    /// Replaces the regeneration command template. `{class}` expands to the
    /// target's name.
    #[must_use]
    pub fn with_regenerate_command(mut self, command: impl Into<String>) -> Self {
        self.regenerate_command = command.into();
        self
    }

    /// Builds and resolves the declaration tree for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SuperclassUnresolved`] when the target has no
    /// discoverable superclass; no unit runs in that case. Unit failures are
    /// never errors; they are reported through [`Assembly::diagnostics`].
    pub fn assemble(
        &self,
        target: &TargetClassDescriptor,
        known_classes: &KnownClassSet,
    ) -> Result<Assembly, GenerateError> {
        info!(class = %target.name, "generating stubs");
        if target.resolved_superclass().is_none() {
            return Err(GenerateError::SuperclassUnresolved {
                class: target.name.clone(),
            });
        }

        let mut accumulator = DeclarationTree::new();
        let mut diagnostics = Vec::new();
        for unit in self.registry.instantiate(target, known_classes) {
            match run_isolated(unit.as_ref()) {
                Ok(scratch) => {
                    debug!(
                        class = %target.name,
                        unit = unit.name(),
                        namespaces = scratch.nodes().len(),
                        "unit contributed declarations"
                    );
                    accumulator.append(scratch);
                }
                Err(error) => {
                    warn!(class = %target.name, unit = unit.name(), %error, "unit failed");
                    diagnostics.push(Diagnostic::UnitFailed {
                        class: target.name.clone(),
                        unit: unit.name().to_owned(),
                        error: error.to_string(),
                    });
                }
            }
        }

        let mut scaffold = DeclarationTree::attributed(Provenance::Skeleton);
        skeleton::build(target, &mut scaffold)?;
        accumulator.append(scaffold);

        let resolution = resolve(accumulator, &self.policy);
        for diagnostic in &resolution.diagnostics {
            warn!(class = %target.name, "{diagnostic}");
        }
        diagnostics.extend(resolution.diagnostics);

        Ok(Assembly {
            tree: resolution.tree,
            diagnostics,
        })
    }

    /// Generates the stub file text for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SuperclassUnresolved`] when the target has no
    /// discoverable superclass.
    pub fn generate(
        &self,
        target: &TargetClassDescriptor,
        known_classes: &KnownClassSet,
    ) -> Result<Rendered, GenerateError> {
        let assembly = self.assemble(target, known_classes)?;
        let mut text = self.header(&target.name);
        text.push_str(&self.renderer.render(&assembly.tree));
        Ok(Rendered {
            class_name: target.name.clone(),
            text,
            diagnostics: assembly.diagnostics,
        })
    }

    /// Header lines for `class_name`, including the trailing blank line.
    #[must_use]
    pub fn header(&self, class_name: &str) -> String {
        let command = self.regenerate_command.replace("{class}", class_name);
        format!(
            "# This is an autogenerated file for dynamic methods in {class_name}\n\
             # Please rerun {command} to regenerate.\n\n"
        )
    }
}

/// Runs `unit` into a fresh tree stamped with its name.
fn run_isolated(unit: &dyn GeneratorUnit) -> Result<DeclarationTree, UnitError> {
    let mut scratch = DeclarationTree::attributed(Provenance::unit(unit.name()));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| unit.generate(&mut scratch)));
    match outcome {
        Ok(Ok(())) => Ok(scratch),
        Ok(Err(error)) => Err(error),
        Err(payload) => Err(UnitError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn header_expands_class_placeholder() {
        let generator = Generator::new(UnitRegistry::new())
            .with_regenerate_command("bin/stubsmith {class}");
        assert_eq!(
            generator.header("Widget"),
            "# This is an autogenerated file for dynamic methods in Widget\n\
             # Please rerun bin/stubsmith Widget to regenerate.\n\n"
        );
    }

    #[test]
    fn panic_payloads_become_messages() {
        let boxed: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let owned: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(owned.as_ref()), "bang");
        let other: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
    }

    struct Counting(Arc<AtomicUsize>);

    impl GeneratorUnit for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn generate(&self, _tree: &mut DeclarationTree) -> Result<(), UnitError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(UnitError::InvalidShape("always fails".to_owned()))
        }
    }

    #[test]
    fn unresolved_superclass_stops_before_any_unit_runs() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let generator = Generator::new(
            UnitRegistry::new().with(move |_, _| Box::new(Counting(Arc::clone(&counter)))),
        );

        let err = generator
            .assemble(&TargetClassDescriptor::new("Ghost", None), &KnownClassSet::new())
            .expect_err("Ghost has no superclass");
        assert!(matches!(
            err,
            GenerateError::SuperclassUnresolved { ref class } if class == "Ghost"
        ));
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        let assembly = generator
            .assemble(
                &TargetClassDescriptor::new("Widget", Some("ApplicationRecord")),
                &KnownClassSet::new(),
            )
            .expect("Widget has a superclass");
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(assembly.diagnostics.len(), 1);
    }

    #[test]
    fn empty_registry_renders_the_skeleton_alone() {
        let target = TargetClassDescriptor::new("Widget", Some("ApplicationRecord"));
        let rendered = Generator::new(UnitRegistry::new())
            .generate(&target, &KnownClassSet::new())
            .expect("superclass is known");
        assert!(rendered.diagnostics.is_empty());
        assert!(rendered.text.starts_with(
            "# This is an autogenerated file for dynamic methods in Widget\n\
             # Please rerun rake rails_rbi:models[Widget] to regenerate.\n\n# typed: strong\n"
        ));
        assert!(rendered.text.ends_with("module Widget::RelationMethods\n  extend T::Sig\nend\n"));
    }
}
