//! Blueprint trait definitions
//!
//! A blueprint turns resolved variables and a stack context into a
//! CloudFormation template. Builds are pure: no I/O, no shared state.

use cfngin_core::cfn::Template;
use cfngin_core::types::{resolve_variables, ResolvedVariables, StackContext, VariableDefinition};
use cfngin_core::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Template builder for one kind of stack
pub trait Blueprint: Send + Sync {
    /// Registered blueprint name (e.g. `cfngin_bucket`)
    fn name(&self) -> &'static str;

    /// Short description shown in listings
    fn description(&self) -> &'static str;

    /// Variables accepted by this blueprint
    fn variables(&self) -> Vec<VariableDefinition>;

    /// Build the template from already-resolved variables
    fn create_template(
        &self,
        variables: &ResolvedVariables,
        context: &StackContext,
    ) -> Result<Template>;

    /// Check provided values against [`Blueprint::variables`] and apply defaults
    fn resolve_variables(&self, provided: &Map<String, Value>) -> Result<ResolvedVariables> {
        resolve_variables(&self.variables(), provided)
    }

    /// Resolve variables, then build the template
    fn render(&self, provided: &Map<String, Value>, context: &StackContext) -> Result<Template> {
        let variables = self.resolve_variables(provided)?;
        self.create_template(&variables, context)
    }
}

/// Listing entry for a registered blueprint
#[derive(Debug, Clone, Serialize)]
pub struct BlueprintInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub variables: Vec<VariableDefinition>,
}

impl BlueprintInfo {
    pub fn of(blueprint: &dyn Blueprint) -> Self {
        Self {
            name: blueprint.name(),
            description: blueprint.description(),
            variables: blueprint.variables(),
        }
    }
}

/// A rendered stack
#[derive(Debug, Clone)]
pub struct RenderedStack {
    /// Fully qualified stack name
    pub fqn: String,

    /// Blueprint that produced the template
    pub blueprint: &'static str,

    /// The template document
    pub template: Template,
}
