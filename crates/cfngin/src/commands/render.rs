//! Render command

use anyhow::{Context as _, Result};
use camino::Utf8Path;
use cfngin_blueprints::{render_all, render_stack, RenderedStack};
use cfngin_core::CfnginConfig;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::{OutputFormat, RenderArgs};
use crate::output;

pub fn run(args: RenderArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = CfnginConfig::load(config_path)?;

    let rendered = match &args.stack {
        Some(name) => {
            let stack = config.stack(name)?;
            vec![render_stack(&config, stack)?]
        }
        None => render_all(&config)?,
    };

    if rendered.is_empty() {
        output::warning(&format!("No enabled stacks in {}", config.config_path));
        return Ok(());
    }

    let document = format_document(&rendered, args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path))?;
            output::success(&format!(
                "Rendered {} stack(s) to {}",
                rendered.len(),
                path
            ));
        }
        None => print!("{}", document),
    }

    Ok(())
}

/// A single stack renders as its template; several as a map keyed by stack fqn
fn format_document(rendered: &[RenderedStack], format: OutputFormat) -> Result<String> {
    if let [single] = rendered {
        let document = match format {
            OutputFormat::Json => single.template.to_json()?,
            OutputFormat::Yaml => single.template.to_yaml()?,
        };
        return Ok(with_trailing_newline(document));
    }

    let mut stacks = Map::new();
    for stack in rendered {
        stacks.insert(stack.fqn.clone(), stack.template.to_value()?);
    }
    let stacks = Value::Object(stacks);

    let document = match format {
        OutputFormat::Json => to_json(&stacks)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(&stacks)?,
    };
    Ok(with_trailing_newline(document))
}

/// Pretty JSON with the same four-space indentation as single templates
fn to_json(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

fn with_trailing_newline(mut document: String) -> String {
    if !document.ends_with('\n') {
        document.push('\n');
    }
    document
}
