//! CloudFormation template document

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::intrinsic::Intrinsic;
use crate::error::{Error, Result};

/// Template format version marker
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A resource declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    /// Resource type (e.g. `AWS::S3::Bucket`)
    #[serde(rename = "Type")]
    pub resource_type: String,

    /// Resource properties
    #[serde(rename = "Properties", skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl Resource {
    /// Create a resource from any serializable properties struct
    ///
    /// The properties must serialize to a JSON object.
    pub fn new(resource_type: impl Into<String>, properties: &impl Serialize) -> Result<Self> {
        let resource_type = resource_type.into();
        let properties = match serde_json::to_value(properties)? {
            Value::Object(map) => map,
            other => {
                return Err(Error::Template(format!(
                    "Properties for {} must be an object, got {}",
                    resource_type, other
                )))
            }
        };

        Ok(Self {
            resource_type,
            properties,
        })
    }

    /// Look up a single property
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// A template output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    #[serde(rename = "Value")]
    pub value: Intrinsic,
}

impl Output {
    pub fn new(value: Intrinsic) -> Self {
        Self { value }
    }
}

/// CloudFormation template document
///
/// Resources and outputs are keyed by logical id and kept in sorted order so
/// that identical builds render byte-identical documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        skip_serializing_if = "Option::is_none"
    )]
    version: Option<String>,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "Outputs", skip_serializing_if = "BTreeMap::is_empty")]
    outputs: BTreeMap<String, Output>,

    #[serde(rename = "Resources")]
    resources: BTreeMap<String, Resource>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Add a resource under a logical id
    pub fn add_resource(&mut self, logical_id: impl Into<String>, resource: Resource) -> Result<()> {
        let logical_id = logical_id.into();
        if self.resources.contains_key(&logical_id) {
            return Err(Error::duplicate_logical_id(logical_id));
        }

        debug!("Adding resource {} ({})", logical_id, resource.resource_type);
        self.resources.insert(logical_id, resource);
        Ok(())
    }

    /// Add an output under a logical id
    pub fn add_output(&mut self, logical_id: impl Into<String>, output: Output) -> Result<()> {
        let logical_id = logical_id.into();
        if self.outputs.contains_key(&logical_id) {
            return Err(Error::duplicate_logical_id(logical_id));
        }

        debug!("Adding output {}", logical_id);
        self.outputs.insert(logical_id, output);
        Ok(())
    }

    pub fn resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.get(logical_id)
    }

    pub fn output(&self, logical_id: &str) -> Option<&Output> {
        self.outputs.get(logical_id)
    }

    pub fn resources(&self) -> &BTreeMap<String, Resource> {
        &self.resources
    }

    pub fn outputs(&self) -> &BTreeMap<String, Output> {
        &self.outputs
    }

    /// Template as a JSON value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as pretty JSON with four-space indentation
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| Error::Template(format!("Invalid UTF-8 in JSON: {}", e)))
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn queue() -> Resource {
        Resource::new("AWS::SQS::Queue", &json!({"QueueName": "jobs"})).unwrap()
    }

    #[test]
    fn test_empty_template_has_resources_section() {
        let value = Template::new().to_value().unwrap();
        assert_eq!(value, json!({"Resources": {}}));
    }

    #[test]
    fn test_template_document_shape() {
        let mut template = Template::new();
        template.set_version(TEMPLATE_FORMAT_VERSION);
        template.set_description("Queue stack");
        template.add_resource("Queue", queue()).unwrap();
        template
            .add_output(
                "QueueArn",
                Output::new(Intrinsic::get_att("Queue", "Arn")),
            )
            .unwrap();

        let value = template.to_value().unwrap();
        assert_eq!(
            value,
            json!({
                "AWSTemplateFormatVersion": "2010-09-09",
                "Description": "Queue stack",
                "Outputs": {
                    "QueueArn": {
                        "Value": {"Fn::GetAtt": ["Queue", "Arn"]}
                    }
                },
                "Resources": {
                    "Queue": {
                        "Properties": {"QueueName": "jobs"},
                        "Type": "AWS::SQS::Queue"
                    }
                }
            })
        );
    }

    #[test]
    fn test_duplicate_resource_is_rejected() {
        let mut template = Template::new();
        template.add_resource("Queue", queue()).unwrap();
        let err = template.add_resource("Queue", queue()).unwrap_err();
        assert!(matches!(err, Error::DuplicateLogicalId { .. }));
    }

    #[test]
    fn test_duplicate_output_is_rejected() {
        let mut template = Template::new();
        template
            .add_output("Name", Output::new(Intrinsic::reference("A")))
            .unwrap();
        let err = template
            .add_output("Name", Output::new(Intrinsic::reference("B")))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateLogicalId { ref logical_id } if logical_id == "Name"));
    }

    #[test]
    fn test_non_object_properties_are_rejected() {
        let err = Resource::new("AWS::SQS::Queue", &json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let mut template = Template::new();
        template.set_version(TEMPLATE_FORMAT_VERSION);
        let json = template.to_json().unwrap();
        assert!(json.contains("\n    \"AWSTemplateFormatVersion\": \"2010-09-09\""));
    }

    #[test]
    fn test_yaml_rendering() {
        let mut template = Template::new();
        template.add_resource("Queue", queue()).unwrap();
        template
            .add_output("Queue", Output::new(Intrinsic::reference("Queue")))
            .unwrap();

        let yaml = template.to_yaml().unwrap();
        let parsed: Value = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed["Outputs"]["Queue"]["Value"]["Ref"], "Queue");
        assert_eq!(parsed["Resources"]["Queue"]["Type"], "AWS::SQS::Queue");
    }
}
