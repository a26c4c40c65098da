//! Ambient context for blueprint builds
//!
//! The context carries the deployment namespace and regions. It is the only
//! source of the stack fully-qualified name and the bucket region handed to
//! blueprints.

use serde::{Deserialize, Serialize};

/// Default delimiter between namespace and stack name
pub const DEFAULT_NAMESPACE_DELIMITER: &str = "-";

/// Deployment-wide context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Namespace prefixed to every stack name
    pub namespace: String,

    /// Delimiter placed between namespace and stack name
    pub namespace_delimiter: String,

    /// Target region
    pub region: String,

    /// Region used for the CFNgin bucket
    pub bucket_region: String,
}

impl Context {
    /// Create a context whose bucket region matches the target region
    pub fn new(namespace: impl Into<String>, region: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            namespace: namespace.into(),
            namespace_delimiter: DEFAULT_NAMESPACE_DELIMITER.to_string(),
            bucket_region: region.clone(),
            region,
        }
    }

    /// Override the namespace delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.namespace_delimiter = delimiter.into();
        self
    }

    /// Override the bucket region
    pub fn with_bucket_region(mut self, bucket_region: impl Into<String>) -> Self {
        self.bucket_region = bucket_region.into();
        self
    }

    /// Fully qualified name for a stack
    ///
    /// Names already carrying the namespace prefix are returned unchanged,
    /// as are all names when the namespace is empty.
    pub fn get_fqn(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            return name.to_string();
        }

        let prefix = format!("{}{}", self.namespace, self.namespace_delimiter);
        if name.starts_with(&prefix) {
            return name.to_string();
        }

        format!("{}{}", prefix, name)
    }

    /// Build the per-stack context handed to a blueprint
    pub fn stack_context(&self, stack_name: &str) -> StackContext {
        StackContext {
            stack_fqn: self.get_fqn(stack_name),
            bucket_region: self.bucket_region.clone(),
        }
    }
}

/// Context for a single stack build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackContext {
    /// Fully qualified stack name
    pub stack_fqn: String,

    /// Region used for the CFNgin bucket
    pub bucket_region: String,
}

impl StackContext {
    pub fn new(stack_fqn: impl Into<String>, bucket_region: impl Into<String>) -> Self {
        Self {
            stack_fqn: stack_fqn.into(),
            bucket_region: bucket_region.into(),
        }
    }
}
