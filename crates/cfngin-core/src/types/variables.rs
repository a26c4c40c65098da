//! Blueprint variable definitions and resolution
//!
//! A blueprint declares the variables it accepts as a list of
//! [`VariableDefinition`]s. Values provided by a stack config are checked
//! against those definitions and merged with their defaults before the
//! blueprint ever sees them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Accepted type of a blueprint variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    /// A string value or null
    OptionalString,
    /// A mapping of string keys to string values
    StringMap,
}

impl VariableType {
    /// Check whether a JSON value is acceptable for this type
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            VariableType::OptionalString => value.is_string() || value.is_null(),
            VariableType::StringMap => value
                .as_object()
                .is_some_and(|map| map.values().all(Value::is_string)),
        }
    }
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableType::OptionalString => write!(f, "Optional[str]"),
            VariableType::StringMap => write!(f, "Dict[str, str]"),
        }
    }
}

/// Declaration of a single blueprint variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Variable name as used in stack configs (e.g. `BucketName`)
    pub name: String,

    /// Accepted type
    #[serde(rename = "type")]
    pub var_type: VariableType,

    /// Default used when the stack config does not provide a value
    pub default: Value,

    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl VariableDefinition {
    pub fn new(
        name: &str,
        var_type: VariableType,
        default: Value,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            var_type,
            default,
            description: description.to_string(),
        }
    }
}

/// Variables after defaults have been applied and types checked
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedVariables {
    values: BTreeMap<String, Value>,
}

impl ResolvedVariables {
    /// Raw value of a resolved variable
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Optional string variable. Null and empty strings both read as `None`.
    pub fn optional_str(&self, name: &str) -> Result<Option<&str>> {
        match self.values.get(name) {
            None => Err(Error::missing_variable(name)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(Error::invalid_variable(name, "Optional[str]")),
        }
    }

    /// String-to-string mapping variable
    pub fn string_map(&self, name: &str) -> Result<BTreeMap<String, String>> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| Error::missing_variable(name))?;
        let object = value
            .as_object()
            .ok_or_else(|| Error::invalid_variable(name, "Dict[str, str]"))?;

        object
            .iter()
            .map(|(k, v)| {
                v.as_str()
                    .map(|s| (k.clone(), s.to_string()))
                    .ok_or_else(|| Error::invalid_variable(name, "Dict[str, str]"))
            })
            .collect()
    }

    /// Iterate over resolved names and values in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

/// Resolve provided values against a blueprint's variable definitions
///
/// Provided values must match the declared type. Absent values fall back to
/// the definition's default. Provided values that no definition names are ignored.
pub fn resolve_variables(
    definitions: &[VariableDefinition],
    provided: &Map<String, Value>,
) -> Result<ResolvedVariables> {
    let mut values = BTreeMap::new();

    for def in definitions {
        let value = match provided.get(&def.name) {
            Some(value) => {
                if !def.var_type.accepts(value) {
                    return Err(Error::invalid_variable(&def.name, def.var_type.to_string()));
                }
                value.clone()
            }
            None => {
                debug!("Variable {} not provided, using default", def.name);
                def.default.clone()
            }
        };
        values.insert(def.name.clone(), value);
    }

    for name in provided.keys() {
        if !definitions.iter().any(|d| &d.name == name) {
            warn!("Ignoring unknown variable: {}", name);
        }
    }

    Ok(ResolvedVariables { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definitions() -> Vec<VariableDefinition> {
        vec![
            VariableDefinition::new("BucketName", VariableType::OptionalString, Value::Null, ""),
            VariableDefinition::new("Tags", VariableType::StringMap, json!({}), ""),
        ]
    }

    fn provided(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults_are_applied() {
        let vars = resolve_variables(&definitions(), &Map::new()).unwrap();

        assert_eq!(vars.get("BucketName"), Some(&Value::Null));
        assert_eq!(vars.optional_str("BucketName").unwrap(), None);
        assert!(vars.string_map("Tags").unwrap().is_empty());
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let err = resolve_variables(
            &definitions(),
            &provided(json!({"BucketName": 42})),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidVariable { ref name, .. } if name == "BucketName"));
    }

    #[test]
    fn test_tags_must_have_string_values() {
        let err = resolve_variables(
            &definitions(),
            &provided(json!({"Tags": {"count": 3}})),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidVariable { ref name, .. } if name == "Tags"));
    }

    #[test]
    fn test_empty_string_reads_as_absent() {
        let vars = resolve_variables(
            &definitions(),
            &provided(json!({"BucketName": ""})),
        )
        .unwrap();
        assert_eq!(vars.optional_str("BucketName").unwrap(), None);
    }

    #[test]
    fn test_unknown_variables_are_ignored() {
        let vars = resolve_variables(
            &definitions(),
            &provided(json!({"Extra": "x"})),
        )
        .unwrap();
        assert!(vars.get("Extra").is_none());
        assert_eq!(vars.iter().count(), 2);
    }

    #[test]
    fn test_accessor_on_unresolved_name() {
        let vars = ResolvedVariables::default();
        assert!(matches!(
            vars.optional_str("BucketName"),
            Err(Error::MissingVariable { .. })
        ));
        assert!(matches!(
            vars.string_map("Tags"),
            Err(Error::MissingVariable { .. })
        ));
        assert!(vars
            .optional_str("BucketName")
            .unwrap_err()
            .to_string()
            .contains("Required configuration value missing"));
    }
}
