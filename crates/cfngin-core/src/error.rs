//! Error types for cfngin-core

use thiserror::Error;

/// Result type alias using cfngin-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for CFNgin
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Schema validation error
    #[error("Schema validation failed:\n{errors}")]
    SchemaValidation { errors: String },

    /// Schema not found
    #[error("Schema not found: {name}")]
    SchemaNotFound { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A blueprint read a variable that was never resolved
    #[error("Required configuration value missing: {name}")]
    MissingVariable { name: String },

    /// A blueprint variable has the wrong type
    #[error("Invalid value for variable {name}: expected {expected}")]
    InvalidVariable { name: String, expected: String },

    /// Blueprint name not registered
    #[error("Unknown blueprint: {name}. Valid blueprints: {available}")]
    UnknownBlueprint { name: String, available: String },

    /// Stack not present in the config file
    #[error("Stack not found in configuration: {name}")]
    StackNotFound { name: String },

    /// Two stacks share a fully qualified name
    #[error("Duplicate stack name: {fqn} is defined more than once")]
    DuplicateStack { fqn: String },

    /// Resource or output logical id already used in a template
    #[error("Duplicate logical id in template: {logical_id}")]
    DuplicateLogicalId { logical_id: String },

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a schema validation error from a list of errors
    pub fn schema_validation(errors: Vec<String>) -> Self {
        Self::SchemaValidation {
            errors: errors.join("\n"),
        }
    }

    /// Create a schema not found error
    pub fn schema_not_found(name: impl Into<String>) -> Self {
        Self::SchemaNotFound { name: name.into() }
    }

    /// Create a missing variable error
    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    /// Create an invalid variable error
    pub fn invalid_variable(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidVariable {
            name: name.into(),
            expected: expected.into(),
        }
    }

    /// Create an unknown blueprint error
    pub fn unknown_blueprint(name: impl Into<String>, available: &[&str]) -> Self {
        Self::UnknownBlueprint {
            name: name.into(),
            available: available.join(", "),
        }
    }

    /// Create a stack not found error
    pub fn stack_not_found(name: impl Into<String>) -> Self {
        Self::StackNotFound { name: name.into() }
    }

    /// Create a duplicate stack error
    pub fn duplicate_stack(fqn: impl Into<String>) -> Self {
        Self::DuplicateStack { fqn: fqn.into() }
    }

    /// Create a duplicate logical id error
    pub fn duplicate_logical_id(logical_id: impl Into<String>) -> Self {
        Self::DuplicateLogicalId {
            logical_id: logical_id.into(),
        }
    }
}
