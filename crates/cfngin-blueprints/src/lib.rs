//! CFNgin blueprints
//!
//! This crate provides the blueprints that turn declarative stack variables
//! into CloudFormation templates:
//!
//! - **cfngin_bucket** - the S3 bucket CFNgin stores templates in, with
//!   default encryption (S3-managed or KMS), versioning, and tags
//!
//! # Usage
//!
//! ```yaml
//! # cfngin.yaml
//! namespace: example
//! region: us-east-1
//! stacks:
//!   - name: cfngin-bucket
//!     blueprint: cfngin_bucket
//!     variables:
//!       KMSMasterKeyID: alias/cfngin
//!       Tags:
//!         env: prod
//! ```

pub mod bucket;
pub mod traits;

#[cfg(test)]
mod tests;

pub use bucket::CfnginBucket;
pub use traits::{Blueprint, BlueprintInfo, RenderedStack};

use cfngin_core::types::StackDefinition;
use cfngin_core::{CfnginConfig, Error, Result};
use tracing::{debug, info};

/// Names accepted by [`create_blueprint`]
const BLUEPRINT_NAMES: &[&str] = &[bucket::BLUEPRINT_NAME];

/// Create a blueprint instance by registered name
pub fn create_blueprint(name: &str) -> Result<Box<dyn Blueprint>> {
    match name {
        "cfngin_bucket" | "cfngin-bucket" | "CFNginBucket" => Ok(Box::new(CfnginBucket::new())),
        _ => Err(Error::unknown_blueprint(name, BLUEPRINT_NAMES)),
    }
}

/// Registered blueprint names
pub fn available_blueprints() -> &'static [&'static str] {
    BLUEPRINT_NAMES
}

/// Render a single configured stack
pub fn render_stack(config: &CfnginConfig, stack: &StackDefinition) -> Result<RenderedStack> {
    let blueprint = create_blueprint(&stack.blueprint)?;
    let context = config.context().stack_context(&stack.name);

    info!(
        "Rendering stack {} with blueprint {}",
        context.stack_fqn,
        blueprint.name()
    );

    let template = blueprint.render(&stack.variables, &context)?;

    Ok(RenderedStack {
        fqn: context.stack_fqn,
        blueprint: blueprint.name(),
        template,
    })
}

/// Render every enabled stack in config order
///
/// Fails before rendering anything if two stacks share a fully qualified name.
pub fn render_all(config: &CfnginConfig) -> Result<Vec<RenderedStack>> {
    config.check_unique_stacks()?;

    let rendered = config
        .enabled_stacks()
        .map(|stack| render_stack(config, stack))
        .collect::<Result<Vec<_>>>()?;

    debug!("Rendered {} stack(s)", rendered.len());
    Ok(rendered)
}
