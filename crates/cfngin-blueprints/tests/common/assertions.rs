//! Assertion helpers for rendered templates
//!
//! Templates are inspected as parsed JSON so the checks hold regardless of
//! key order or indentation.

#![allow(dead_code)]

use serde_json::Value;

/// Parse rendered template JSON
pub fn parse_template(json: &str) -> Value {
    serde_json::from_str(json)
        .unwrap_or_else(|e| panic!("Template is not valid JSON: {}\n{}", e, json))
}

/// Properties of a resource, asserting its type
pub fn resource_properties<'a>(template: &'a Value, logical_id: &str, resource_type: &str) -> &'a Value {
    let resource = &template["Resources"][logical_id];
    assert!(
        resource.is_object(),
        "Template has no resource {}.\nTemplate:\n{:#}",
        logical_id,
        template
    );
    assert_eq!(
        resource["Type"], resource_type,
        "Resource {} has unexpected type",
        logical_id
    );
    &resource["Properties"]
}

/// Assert that an output exists and has the expected value
pub fn assert_output(template: &Value, name: &str, expected: &Value) {
    let output = &template["Outputs"][name];
    assert!(
        output.is_object(),
        "Template has no output {}.\nTemplate:\n{:#}",
        name,
        template
    );
    assert_eq!(&output["Value"], expected, "Output {} has unexpected value", name);
}

/// Default encryption rule of a bucket's properties
pub fn encryption_by_default(properties: &Value) -> &Value {
    &properties["BucketEncryption"]["ServerSideEncryptionConfiguration"][0]
        ["ServerSideEncryptionByDefault"]
}

/// Assert the bucket uses S3-managed keys
pub fn assert_service_managed(properties: &Value) {
    let rule = encryption_by_default(properties);
    assert_eq!(rule["SSEAlgorithm"], "AES256");
    assert!(
        rule.get("KMSMasterKeyID").is_none(),
        "Service-managed encryption must not carry a key: {}",
        rule
    );
}

/// Assert the bucket uses the given KMS key
pub fn assert_customer_managed(properties: &Value, key: &str) {
    let rule = encryption_by_default(properties);
    assert_eq!(rule["SSEAlgorithm"], "aws:kms");
    assert_eq!(rule["KMSMasterKeyID"], key);
}

/// Assert versioning is enabled
pub fn assert_versioning_enabled(properties: &Value) {
    assert_eq!(properties["VersioningConfiguration"]["Status"], "Enabled");
}
