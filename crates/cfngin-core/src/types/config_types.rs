//! Stack configuration file types (cfngin.yaml)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::context::{Context, DEFAULT_NAMESPACE_DELIMITER};

/// Root structure of cfngin.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfnginConfigFile {
    /// Namespace prefixed to every stack name
    pub namespace: String,

    /// Delimiter between namespace and stack name
    #[serde(default = "default_namespace_delimiter")]
    pub namespace_delimiter: String,

    /// Target region
    pub region: String,

    /// Region of the CFNgin bucket (defaults to `region`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfngin_bucket_region: Option<String>,

    /// Stack definitions
    #[serde(default)]
    pub stacks: Vec<StackDefinition>,
}

fn default_namespace_delimiter() -> String {
    DEFAULT_NAMESPACE_DELIMITER.to_string()
}

impl CfnginConfigFile {
    /// Build the deployment context described by this file
    pub fn context(&self) -> Context {
        let bucket_region = self
            .cfngin_bucket_region
            .clone()
            .unwrap_or_else(|| self.region.clone());

        Context::new(&self.namespace, &self.region)
            .with_delimiter(&self.namespace_delimiter)
            .with_bucket_region(bucket_region)
    }
}

/// A single stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDefinition {
    /// Stack name (without namespace)
    pub name: String,

    /// Registered blueprint name
    pub blueprint: String,

    /// Values for the blueprint's variables
    #[serde(default)]
    pub variables: Map<String, Value>,

    /// Skip this stack when rendering all stacks
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
namespace: example
region: us-east-1
stacks:
  - name: cfngin-bucket
    blueprint: cfngin_bucket
"#;
        let config: CfnginConfigFile = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.namespace_delimiter, "-");
        assert_eq!(config.stacks.len(), 1);
        assert!(config.stacks[0].enabled);
        assert!(config.stacks[0].variables.is_empty());

        let ctx = config.context();
        assert_eq!(ctx.bucket_region, "us-east-1");
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
namespace: example
namespace_delimiter: "."
region: us-east-1
cfngin_bucket_region: eu-west-1
stacks:
  - name: cfngin-bucket
    blueprint: cfngin_bucket
    enabled: false
    variables:
      BucketName: custom-bucket
      KMSMasterKeyID: null
      Tags:
        env: prod
"#;
        let config: CfnginConfigFile = serde_yaml_ng::from_str(yaml).unwrap();
        let stack = &config.stacks[0];
        assert!(!stack.enabled);
        assert_eq!(stack.variables["BucketName"], "custom-bucket");
        assert!(stack.variables["KMSMasterKeyID"].is_null());
        assert_eq!(stack.variables["Tags"]["env"], "prod");

        let ctx = config.context();
        assert_eq!(ctx.bucket_region, "eu-west-1");
        assert_eq!(ctx.get_fqn("cfngin-bucket"), "example.cfngin-bucket");
    }
}
