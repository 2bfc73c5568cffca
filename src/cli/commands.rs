// ABOUTME: Command implementations for the stencil CLI
// ABOUTME: Handles execution of the render and validate commands

use anyhow::{anyhow, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

use crate::engine::{is_valid, process_object, process_string};
use crate::helpers::coerce;

use super::config::Config;

/// Render a template (or a whole JSON document) against a context.
pub fn render(
    template: Option<String>,
    file: Option<PathBuf>,
    context_path: Option<PathBuf>,
    vars: HashMap<String, String>,
    as_object: bool,
    config: &Config,
) -> Result<()> {
    let template = load_template(template, file)?;
    let context = build_context(context_path, vars, config)?;

    if as_object {
        let document: Value = serde_json::from_str(&template)
            .map_err(|e| anyhow!("template is not a JSON document: {}", e))?;
        let result = process_object(&document, &context);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let result = process_string(&template, &context);
    match result {
        Value::String(text) => println!("{text}"),
        other => println!("{}", serde_json::to_string(&other)?),
    }
    Ok(())
}

/// Check template syntax and report the verdict. Invalid templates exit
/// non-zero so shell pipelines can branch on the result.
pub fn validate(template: Option<String>, file: Option<PathBuf>) -> Result<()> {
    let template = load_template(template, file)?;
    if is_valid(&template) {
        info!("template is valid");
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        Err(anyhow!("template contains malformed placeholders"))
    }
}

fn load_template(template: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (template, file) {
        (Some(template), _) => Ok(template),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("failed to read template file '{}': {}", path.display(), e)),
        (None, None) => Err(anyhow!("no template given: pass it inline or with --file")),
    }
}

/// Assemble the evaluation context: configured defaults, then a context
/// file, then command-line overrides, later sources winning.
fn build_context(
    context_path: Option<PathBuf>,
    vars: HashMap<String, String>,
    config: &Config,
) -> Result<Value> {
    let mut context = serde_json::Map::new();
    for (key, value) in &config.template_vars {
        context.insert(key.clone(), Value::String(value.clone()));
    }

    if let Some(path) = context_path {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("failed to read context file '{}': {}", path.display(), e))?;
        let loaded: Value = serde_json::from_str(&content)
            .map_err(|e| anyhow!("failed to parse context file '{}': {}", path.display(), e))?;
        match loaded {
            Value::Object(map) => context.extend(map),
            other => {
                return Err(anyhow!(
                    "context file must hold a JSON object, got {}",
                    coerce::render_value(&other)
                ))
            }
        }
    }

    for (key, value) in vars {
        context.insert(key, Value::String(value));
    }
    info!("context assembled with {} entries", context.len());
    Ok(Value::Object(context))
}
