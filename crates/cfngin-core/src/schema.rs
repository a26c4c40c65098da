//! JSON Schema validation for CFNgin configurations

use crate::error::{Error, Result};
use jsonschema::Validator;
use rust_embed::RustEmbed;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Embedded schema files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../schemas/"]
#[prefix = ""]
struct EmbeddedSchemas;

/// Schema validator with pre-compiled schemas
#[derive(Debug)]
pub struct SchemaValidator {
    /// Compiled schemas by name
    schemas: HashMap<String, Validator>,
}

impl SchemaValidator {
    /// Create a new schema validator with embedded schemas
    pub fn new() -> Result<Self> {
        let mut schemas = HashMap::new();

        for file in EmbeddedSchemas::iter() {
            if file.ends_with(".schema.json") {
                let name = file.trim_end_matches(".schema.json").to_string();

                debug!("Loading embedded schema: {}", name);

                if let Some(content) = EmbeddedSchemas::get(&file) {
                    let json_str = std::str::from_utf8(&content.data).map_err(|_| {
                        Error::invalid_config(format!("Invalid UTF-8 in schema: {}", file))
                    })?;

                    let schema_value: Value = serde_json::from_str(json_str)?;
                    schemas.insert(name.clone(), compile(&name, &schema_value)?);
                }
            }
        }

        if schemas.is_empty() {
            debug!("No embedded schemas found, using fallback schemas");
            Self::load_fallback_schemas(&mut schemas)?;
        }

        Ok(Self { schemas })
    }

    /// Validate JSON value against a schema
    pub fn validate(&self, value: &Value, schema_name: &str) -> Result<()> {
        let schema = self
            .schemas
            .get(schema_name)
            .ok_or_else(|| Error::schema_not_found(schema_name))?;

        let errors: Vec<String> = schema
            .iter_errors(value)
            .map(|e| {
                let path = e.instance_path().to_string();
                if path.is_empty() {
                    format!("  - {}", e)
                } else {
                    format!("  - {}: {}", path, e)
                }
            })
            .collect();

        if !errors.is_empty() {
            return Err(Error::schema_validation(errors));
        }

        Ok(())
    }

    /// Validate YAML string against a schema
    pub fn validate_yaml(&self, yaml: &str, schema_name: &str) -> Result<()> {
        let value: Value = serde_yaml_ng::from_str(yaml)?;
        self.validate(&value, schema_name)
    }

    /// Check if a schema exists
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// List available schemas
    pub fn list_schemas(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Minimal schemas for when embedded ones aren't available
    fn load_fallback_schemas(schemas: &mut HashMap<String, Validator>) -> Result<()> {
        let cfngin_schema = serde_json::json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "required": ["namespace", "region", "stacks"],
            "properties": {
                "namespace": { "type": "string" },
                "namespace_delimiter": { "type": "string" },
                "region": { "type": "string" },
                "cfngin_bucket_region": { "type": "string" },
                "stacks": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["name", "blueprint"]
                    }
                }
            }
        });

        schemas.insert("cfngin".to_string(), compile("cfngin", &cfngin_schema)?);
        Ok(())
    }
}

fn compile(name: &str, schema: &Value) -> Result<Validator> {
    jsonschema::validator_for(schema)
        .map_err(|e| Error::invalid_config(format!("Failed to compile schema {}: {}", name, e)))
}
