//! CFNgin bucket blueprint
//!
//! Creates the S3 bucket CFNgin uses for template and artifact storage.
//!
//! # Variables
//!
//! - **BucketName** (`Optional[str]`, default `null`): name of the bucket.
//!   When absent the name is `<stack-fqn>-<bucket-region>` with the stack
//!   name lowercased.
//! - **KMSMasterKeyID** (`Optional[str]`, default `null`): key ID or ARN of a
//!   KMS key for default bucket encryption. When absent the S3 service key
//!   (`AES256`) is used.
//! - **Tags** (`Dict[str, str]`, default `{}`): tags applied to the bucket.
//!
//! # Outputs
//!
//! - **CFNginBucket**: name of the bucket.
//! - **CFNginBucketArn**: ARN of the bucket.

use cfngin_core::cfn::s3::{Bucket, BucketEncryption, Tags, VersioningConfiguration};
use cfngin_core::cfn::{Intrinsic, Output, Template, TEMPLATE_FORMAT_VERSION};
use cfngin_core::types::{ResolvedVariables, StackContext, VariableDefinition, VariableType};
use cfngin_core::Result;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::traits::Blueprint;

/// Registered blueprint name
pub const BLUEPRINT_NAME: &str = "cfngin_bucket";

/// Logical id of the bucket resource
pub const LOGICAL_NAME: &str = "CFNginBucket";

/// Template description
pub const TEMPLATE_DESCRIPTION: &str = "Runway CFNgin Bucket";

pub const VAR_BUCKET_NAME: &str = "BucketName";
pub const VAR_KMS_MASTER_KEY_ID: &str = "KMSMasterKeyID";
pub const VAR_TAGS: &str = "Tags";

/// Typed view of the bucket blueprint's variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketVariables {
    pub bucket_name: Option<String>,
    pub kms_master_key_id: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl BucketVariables {
    /// Read the typed variables out of a resolved set
    pub fn from_resolved(variables: &ResolvedVariables) -> Result<Self> {
        Ok(Self {
            bucket_name: variables.optional_str(VAR_BUCKET_NAME)?.map(str::to_string),
            kms_master_key_id: variables
                .optional_str(VAR_KMS_MASTER_KEY_ID)?
                .map(str::to_string),
            tags: variables.string_map(VAR_TAGS)?,
        })
    }
}

/// Variable definitions for the bucket blueprint
pub fn variable_definitions() -> Vec<VariableDefinition> {
    vec![
        VariableDefinition::new(
            VAR_BUCKET_NAME,
            VariableType::OptionalString,
            Value::Null,
            "Name to use for the S3 bucket. Defaults to <stack-fqn>-<bucket-region>.",
        ),
        VariableDefinition::new(
            VAR_KMS_MASTER_KEY_ID,
            VariableType::OptionalString,
            Value::Null,
            "Key ID or ARN of a KMS key for default encryption. Defaults to the S3 service key.",
        ),
        VariableDefinition::new(
            VAR_TAGS,
            VariableType::StringMap,
            json!({}),
            "Mapping of tag key to tag value for the bucket.",
        ),
    ]
}

/// Physical bucket name
///
/// A non-empty `bucket_name` wins unchanged. Otherwise the lowercased stack
/// name joined to the bucket region.
pub fn derive_bucket_name(bucket_name: Option<&str>, stack_fqn: &str, bucket_region: &str) -> String {
    match bucket_name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{}-{}", stack_fqn.to_lowercase(), bucket_region),
    }
}

/// Default bucket encryption: customer-managed iff a non-empty key is given
pub fn derive_encryption(kms_master_key_id: Option<&str>) -> BucketEncryption {
    match kms_master_key_id {
        Some(key) if !key.is_empty() => BucketEncryption::CustomerManaged {
            kms_master_key_id: key.to_string(),
        },
        _ => BucketEncryption::ServiceManaged,
    }
}

/// Bucket resource properties
pub fn build_bucket(variables: &BucketVariables, context: &StackContext) -> Bucket {
    Bucket {
        bucket_encryption: derive_encryption(variables.kms_master_key_id.as_deref()),
        bucket_name: derive_bucket_name(
            variables.bucket_name.as_deref(),
            &context.stack_fqn,
            &context.bucket_region,
        ),
        tags: Tags::new(variables.tags.clone()),
        // always on; there is no variable to suspend it
        versioning_configuration: VersioningConfiguration::enabled(),
    }
}

/// Full bucket template: the bucket resource plus name and ARN outputs
pub fn build_template(variables: &BucketVariables, context: &StackContext) -> Result<Template> {
    let bucket = build_bucket(variables, context);
    debug!(
        "Building bucket template for {}: name={} sse={}",
        context.stack_fqn,
        bucket.bucket_name,
        bucket.bucket_encryption.sse_algorithm()
    );

    let mut template = Template::new();
    template.set_description(TEMPLATE_DESCRIPTION);
    template.set_version(TEMPLATE_FORMAT_VERSION);
    template.add_resource(LOGICAL_NAME, bucket.to_resource()?)?;

    template.add_output(LOGICAL_NAME, Output::new(Intrinsic::reference(LOGICAL_NAME)))?;
    template.add_output(
        format!("{}Arn", LOGICAL_NAME),
        Output::new(Intrinsic::get_att(LOGICAL_NAME, "Arn")),
    )?;

    Ok(template)
}

/// Blueprint for the CFNgin bucket stack
#[derive(Debug, Clone, Copy, Default)]
pub struct CfnginBucket;

impl CfnginBucket {
    pub fn new() -> Self {
        Self
    }
}

impl Blueprint for CfnginBucket {
    fn name(&self) -> &'static str {
        BLUEPRINT_NAME
    }

    fn description(&self) -> &'static str {
        "S3 bucket with default encryption, versioning, and tags"
    }

    fn variables(&self) -> Vec<VariableDefinition> {
        variable_definitions()
    }

    fn create_template(
        &self,
        variables: &ResolvedVariables,
        context: &StackContext,
    ) -> Result<Template> {
        let variables = BucketVariables::from_resolved(variables)?;
        build_template(&variables, context)
    }
}
