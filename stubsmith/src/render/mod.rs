//! RBI renderer for resolved declaration trees.
//!
//! Nodes are emitted in tree order as self-contained `class`/`module` blocks.
//! Inside a block, mixins and constants come first, then instance methods,
//! then class methods; each group keeps tree order. Rendering is a pure
//! function of the tree and the configuration, so rendering the same tree
//! twice yields identical text.

mod signature;

use crate::resolve::ResolvedTree;
use crate::tree::{Declaration, Member, MethodScope, Namespace, NamespaceKind};

const INDENT: &str = "  ";

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Parameter count at which signatures break over several lines.
    pub break_params: usize,
    /// Sorbet strictness sigil written at the top of the file.
    pub strictness: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            break_params: 3,
            strictness: "strong".to_owned(),
        }
    }
}

/// Renders resolved trees with a fixed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RbiRenderer {
    config: RenderConfig,
}

impl RbiRenderer {
    /// Creates a renderer using `config`.
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders `tree` as RBI text.
    #[must_use]
    pub fn render(&self, tree: &ResolvedTree) -> String {
        render(tree, &self.config)
    }
}

/// Renders `tree` as RBI text.
#[must_use]
pub fn render(tree: &ResolvedTree, config: &RenderConfig) -> String {
    let mut output = String::with_capacity(4096);
    output.push_str(&format!("# typed: {}\n", config.strictness));
    for namespace in tree.nodes() {
        output.push('\n');
        output.push_str(&render_namespace(namespace, config));
    }
    output
}

fn render_namespace(namespace: &Namespace, config: &RenderConfig) -> String {
    let mut output = match &namespace.kind {
        NamespaceKind::Class {
            superclass: Some(superclass),
        } => format!("class {} < {superclass}\n", namespace.name),
        NamespaceKind::Class { superclass: None } => format!("class {}\n", namespace.name),
        NamespaceKind::Module => format!("module {}\n", namespace.name),
    };

    let mut body_started = false;
    for module in &namespace.includes {
        output.push_str(&format!("{INDENT}include {module}\n"));
        body_started = true;
    }
    for module in &namespace.extends {
        output.push_str(&format!("{INDENT}extend {module}\n"));
        body_started = true;
    }
    for constant in namespace.members.iter().filter_map(Member::as_constant) {
        output.push_str(&format!("{INDENT}{} = {}\n", constant.name, constant.value));
        body_started = true;
    }

    let instance_methods = methods_in_scope(namespace, MethodScope::Instance);
    let class_methods = methods_in_scope(namespace, MethodScope::Class);
    for method in instance_methods.chain(class_methods) {
        if body_started {
            output.push('\n');
        }
        output.push_str(&signature::sig(method, INDENT, config.break_params));
        output.push_str(&signature::def(method, INDENT));
        body_started = true;
    }

    output.push_str("end\n");
    output
}

fn methods_in_scope(
    namespace: &Namespace,
    scope: MethodScope,
) -> impl Iterator<Item = &crate::tree::Method> {
    namespace
        .members
        .iter()
        .filter_map(move |member| match &member.declaration {
            Declaration::Method(method) if method.scope == scope => Some(method),
            Declaration::Method(_) | Declaration::Constant(_) => None,
        })
}
