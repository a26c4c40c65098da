//! Type definitions for CFNgin stacks and blueprints

mod config_types;
mod context;
mod variables;

pub use config_types::{CfnginConfigFile, StackDefinition};
pub use context::{Context, StackContext, DEFAULT_NAMESPACE_DELIMITER};
pub use variables::{resolve_variables, ResolvedVariables, VariableDefinition, VariableType};
