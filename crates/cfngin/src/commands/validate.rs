//! Validate command

use anyhow::{anyhow, Result};
use camino::Utf8Path;
use cfngin_blueprints::create_blueprint;
use cfngin_core::{CfnginConfig, SchemaValidator};
use serde_json::Value;
use tracing::debug;

use crate::cli::ValidateArgs;
use crate::output;

pub fn run(args: ValidateArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let path = args.file.as_deref().or(config_path);

    let validator = SchemaValidator::new()?;
    let config = CfnginConfig::load_and_validate(path, &validator)?;
    config.check_unique_stacks()?;

    output::success(&format!("Configuration is valid: {}", config.config_path));
    output::kv("Namespace", config.namespace());
    output::kv("Region", &config.config.region);
    output::kv("Bucket region", &config.context().bucket_region);

    let context = config.context();
    let mut failures = 0;

    for stack in &config.config.stacks {
        let fqn = context.get_fqn(&stack.name);
        match check_stack(&validator, &stack.blueprint, &stack.variables) {
            Ok(()) => {
                let state = if stack.enabled { "" } else { " (disabled)" };
                output::success(&format!("{} [{}]{}", fqn, stack.blueprint, state));
            }
            Err(e) => {
                failures += 1;
                output::error(&format!("{}: {}", fqn, e));
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} stack(s) failed validation", failures));
    }

    Ok(())
}

/// Check a stack's variables against its blueprint without rendering
fn check_stack(
    validator: &SchemaValidator,
    blueprint: &str,
    variables: &serde_json::Map<String, Value>,
) -> Result<()> {
    let blueprint = create_blueprint(blueprint)?;

    let schema = blueprint.name().replace('_', "-");
    if validator.has_schema(&schema) {
        debug!("Validating variables against schema {}", schema);
        validator.validate(&Value::Object(variables.clone()), &schema)?;
    }

    blueprint.resolve_variables(variables)?;
    Ok(())
}
