//! Configuration file loading and parsing

use crate::error::{Error, Result};
use crate::schema::SchemaValidator;
use crate::templates::{ConfigInitContext, ConfigTemplateRegistry};
use crate::types::{CfnginConfigFile, Context, StackDefinition};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;
use std::fs;
use tracing::debug;

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["cfngin.yaml", "cfngin.yml"];

/// Schema the config file is validated against
const CONFIG_SCHEMA: &str = "cfngin";

/// Loaded CFNgin configuration
#[derive(Debug, Clone)]
pub struct CfnginConfig {
    /// The parsed configuration
    pub config: CfnginConfigFile,

    /// Path to the configuration file
    pub config_path: Utf8PathBuf,
}

impl CfnginConfig {
    /// Load configuration from the specified path or search for it
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let (config_path, content) = Self::read(path)?;
        let config: CfnginConfigFile = serde_yaml_ng::from_str(&content)?;

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Load and validate configuration
    pub fn load_and_validate(path: Option<&Utf8Path>, validator: &SchemaValidator) -> Result<Self> {
        let (config_path, content) = Self::read(path)?;

        // Validate against schema first
        validator.validate_yaml(&content, CONFIG_SCHEMA)?;

        let config: CfnginConfigFile = serde_yaml_ng::from_str(&content)?;

        Ok(Self {
            config,
            config_path,
        })
    }

    fn read(path: Option<&Utf8Path>) -> Result<(Utf8PathBuf, String)> {
        match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        Error::config_not_found(p.as_str())
                    } else {
                        Error::Io(e)
                    }
                })?;
                Ok((p.to_owned(), content))
            }
            None => Self::find_config(),
        }
    }

    /// Search the current directory and its parents for a config file
    fn find_config() -> Result<(Utf8PathBuf, String)> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let cwd = Utf8PathBuf::try_from(cwd)
            .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;

        Self::find_config_from(&cwd)
    }

    fn find_config_from(start: &Utf8Path) -> Result<(Utf8PathBuf, String)> {
        let mut current = start;

        loop {
            for name in CONFIG_FILE_NAMES {
                let path = current.join(name);
                if path.exists() {
                    debug!("Found config file: {}", path);
                    let content = fs::read_to_string(&path)?;
                    return Ok((path, content));
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::config_not_found(
            "cfngin.yaml (searched current and parent directories)",
        ))
    }

    /// Deployment context described by the config
    pub fn context(&self) -> Context {
        self.config.context()
    }

    /// Look up a stack by name (with or without the namespace prefix)
    pub fn stack(&self, name: &str) -> Result<&StackDefinition> {
        let context = self.context();
        let fqn = context.get_fqn(name);

        self.config
            .stacks
            .iter()
            .find(|s| s.name == name || context.get_fqn(&s.name) == fqn)
            .ok_or_else(|| Error::stack_not_found(name))
    }

    /// Fail if two stacks resolve to the same fully qualified name
    pub fn check_unique_stacks(&self) -> Result<()> {
        let context = self.context();
        let mut seen = HashSet::new();

        for stack in &self.config.stacks {
            let fqn = context.get_fqn(&stack.name);
            if !seen.insert(fqn.clone()) {
                return Err(Error::duplicate_stack(fqn));
            }
        }

        Ok(())
    }

    /// Stacks that are enabled for rendering
    pub fn enabled_stacks(&self) -> impl Iterator<Item = &StackDefinition> {
        self.config.stacks.iter().filter(|s| s.enabled)
    }

    /// Namespace
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Serialize the parsed configuration back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(&self.config)?)
    }
}

/// Generate a starter cfngin.yaml
pub fn generate_config(context: &ConfigInitContext) -> Result<String> {
    let registry = ConfigTemplateRegistry::new().map_err(|e| Error::Template(e.to_string()))?;
    registry
        .render_config(context)
        .map_err(|e| Error::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
namespace: example
region: us-east-1
stacks:
  - name: cfngin-bucket
    blueprint: cfngin_bucket
  - name: disabled
    blueprint: cfngin_bucket
    enabled: false
"#;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "cfngin.yaml", CONFIG);

        let config = CfnginConfig::load(Some(&path)).unwrap();
        assert_eq!(config.namespace(), "example");
        assert_eq!(config.config_path, path);
        assert_eq!(config.enabled_stacks().count(), 1);
    }

    #[test]
    fn test_load_missing_path() {
        let err = CfnginConfig::load(Some(Utf8Path::new("/nonexistent/cfngin.yaml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "cfngin.yml", CONFIG);
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let nested = Utf8PathBuf::from_path_buf(nested).unwrap();

        let (found, content) = CfnginConfig::find_config_from(&nested).unwrap();
        assert_eq!(found, path);
        assert!(content.contains("namespace: example"));
    }

    #[test]
    fn test_stack_lookup_accepts_fqn() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "cfngin.yaml", CONFIG);
        let config = CfnginConfig::load(Some(&path)).unwrap();

        assert_eq!(config.stack("cfngin-bucket").unwrap().name, "cfngin-bucket");
        assert_eq!(
            config.stack("example-cfngin-bucket").unwrap().name,
            "cfngin-bucket"
        );
        assert!(matches!(
            config.stack("missing"),
            Err(Error::StackNotFound { .. })
        ));
    }

    #[test]
    fn test_load_and_validate_rejects_bad_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "cfngin.yaml", "namespace: example\nstacks: []\n");
        let validator = SchemaValidator::new().unwrap();

        let err = CfnginConfig::load_and_validate(Some(&path), &validator).unwrap_err();
        assert!(matches!(err, Error::SchemaValidation { .. }));
    }

    #[test]
    fn test_generated_config_round_trips() {
        let yaml = generate_config(&ConfigInitContext::new("example", "us-west-2")).unwrap();
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "cfngin.yaml", &yaml);
        let validator = SchemaValidator::new().unwrap();

        let config = CfnginConfig::load_and_validate(Some(&path), &validator).unwrap();
        assert_eq!(config.context().bucket_region, "us-west-2");
        assert!(config.to_yaml().unwrap().contains("cfngin_bucket"));
    }

    #[test]
    fn test_duplicate_stack_fqn_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "cfngin.yaml",
            r#"
namespace: example
region: us-east-1
stacks:
  - name: bucket
    blueprint: cfngin_bucket
  - name: example-bucket
    blueprint: cfngin_bucket
"#,
        );
        let config = CfnginConfig::load(Some(&path)).unwrap();

        let err = config.check_unique_stacks().unwrap_err();
        assert!(matches!(err, Error::DuplicateStack { ref fqn } if fqn == "example-bucket"));
    }

    #[test]
    fn test_distinct_stack_names_pass_uniqueness_check() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "cfngin.yaml", CONFIG);
        let config = CfnginConfig::load(Some(&path)).unwrap();
        assert!(config.check_unique_stacks().is_ok());
    }
}
