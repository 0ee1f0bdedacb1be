//! Formatting of `sig` blocks and `def` lines.

use crate::tree::{Method, MethodScope, Parameter, ParameterKind};

/// Renders the `sig` block for `method` at `indent`.
///
/// Signatures with at least `break_params` parameters place each parameter on
/// its own line inside a `sig do ... end` block.
pub fn sig(method: &Method, indent: &str, break_params: usize) -> String {
    let tail = method
        .returns
        .as_deref()
        .map_or_else(|| "void".to_owned(), |ty| format!("returns({ty})"));

    if method.parameters.is_empty() {
        return format!("{indent}sig {{ {tail} }}\n");
    }

    if method.parameters.len() >= break_params.max(1) {
        let mut output = format!("{indent}sig do\n{indent}  params(\n");
        let lines: Vec<String> = method
            .parameters
            .iter()
            .map(|param| format!("{indent}    {}", sig_param(param)))
            .collect();
        output.push_str(&lines.join(",\n"));
        output.push_str(&format!("\n{indent}  ).{tail}\n{indent}end\n"));
        return output;
    }

    let params: Vec<String> = method.parameters.iter().map(sig_param).collect();
    format!("{indent}sig {{ params({}).{tail} }}\n", params.join(", "))
}

fn sig_param(param: &Parameter) -> String {
    format!("{}: {}", param.name, param.constraint)
}

/// Renders the `def` line for `method` at `indent`.
pub fn def(method: &Method, indent: &str) -> String {
    let receiver = match method.scope {
        MethodScope::Instance => "",
        MethodScope::Class => "self.",
    };
    let visibility = method
        .visibility
        .keyword()
        .map_or_else(String::new, |keyword| format!("{keyword} "));
    let params = if method.parameters.is_empty() {
        String::new()
    } else {
        let rendered: Vec<String> = method.parameters.iter().map(def_param).collect();
        format!("({})", rendered.join(", "))
    };
    format!("{indent}{visibility}def {receiver}{}{params}; end\n", method.name)
}

fn def_param(param: &Parameter) -> String {
    let name = &param.name;
    match &param.kind {
        ParameterKind::Required => name.clone(),
        ParameterKind::Optional { default } => format!("{name} = {default}"),
        ParameterKind::Rest => format!("*{name}"),
        ParameterKind::Keyword { default: None } => format!("{name}:"),
        ParameterKind::Keyword {
            default: Some(default),
        } => format!("{name}: {default}"),
        ParameterKind::KeywordRest => format!("**{name}"),
        ParameterKind::Block => format!("&{name}"),
    }
}
