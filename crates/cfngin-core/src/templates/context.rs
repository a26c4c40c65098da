//! Template context for config generation
//!
//! Provides context data for rendering cfngin.yaml templates.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tera::Context;

/// Stack name used when none is given
pub const DEFAULT_STACK_NAME: &str = "cfngin-bucket";

/// Context for rendering cfngin.yaml templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInitContext {
    /// Deployment namespace
    pub namespace: String,
    /// Target region
    pub region: String,
    /// Bucket region, when it differs from the target region
    pub bucket_region: Option<String>,
    /// Name of the bucket stack
    pub stack_name: String,
    /// Explicit bucket name
    pub bucket_name: Option<String>,
    /// KMS key for customer-managed encryption
    pub kms_key_id: Option<String>,
    /// Bucket tags
    pub tags: BTreeMap<String, String>,
}

impl ConfigInitContext {
    /// Create a new config init context with the default bucket stack
    pub fn new(namespace: &str, region: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            region: region.to_string(),
            bucket_region: None,
            stack_name: DEFAULT_STACK_NAME.to_string(),
            bucket_name: None,
            kms_key_id: None,
            tags: BTreeMap::new(),
        }
    }

    /// Convert to Tera context for template rendering
    pub fn to_tera_context(&self) -> Result<Context> {
        let context = Context::from_serialize(self)?;
        Ok(context)
    }
}
