//! S3 bucket resource types

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::Deserialize;
use std::collections::BTreeMap;

use super::template::Resource;
use crate::error::Result;

/// Resource type of an S3 bucket
pub const BUCKET_RESOURCE_TYPE: &str = "AWS::S3::Bucket";

/// Server-side encryption algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
pub enum SseAlgorithm {
    #[serde(rename = "AES256")]
    Aes256,
    #[serde(rename = "aws:kms")]
    AwsKms,
}

impl SseAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SseAlgorithm::Aes256 => "AES256",
            SseAlgorithm::AwsKms => "aws:kms",
        }
    }
}

impl std::fmt::Display for SseAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default encryption applied to new objects in a bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BucketEncryption {
    /// S3-managed keys (`AES256`)
    ServiceManaged,
    /// A customer-managed KMS key (`aws:kms`)
    CustomerManaged { kms_master_key_id: String },
}

impl BucketEncryption {
    pub fn sse_algorithm(&self) -> SseAlgorithm {
        match self {
            BucketEncryption::ServiceManaged => SseAlgorithm::Aes256,
            BucketEncryption::CustomerManaged { .. } => SseAlgorithm::AwsKms,
        }
    }

    pub fn kms_master_key_id(&self) -> Option<&str> {
        match self {
            BucketEncryption::ServiceManaged => None,
            BucketEncryption::CustomerManaged { kms_master_key_id } => Some(kms_master_key_id),
        }
    }
}

impl Serialize for BucketEncryption {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(serde::Serialize)]
        struct ByDefault<'a> {
            #[serde(rename = "KMSMasterKeyID", skip_serializing_if = "Option::is_none")]
            kms_master_key_id: Option<&'a str>,
            #[serde(rename = "SSEAlgorithm")]
            sse_algorithm: SseAlgorithm,
        }

        #[derive(serde::Serialize)]
        struct Rule<'a> {
            #[serde(rename = "ServerSideEncryptionByDefault")]
            by_default: ByDefault<'a>,
        }

        #[derive(serde::Serialize)]
        struct Configuration<'a> {
            #[serde(rename = "ServerSideEncryptionConfiguration")]
            rules: [Rule<'a>; 1],
        }

        Configuration {
            rules: [Rule {
                by_default: ByDefault {
                    kms_master_key_id: self.kms_master_key_id(),
                    sse_algorithm: self.sse_algorithm(),
                },
            }],
        }
        .serialize(serializer)
    }
}

/// Bucket versioning state
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
pub enum VersioningStatus {
    Enabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct VersioningConfiguration {
    #[serde(rename = "Status")]
    pub status: VersioningStatus,
}

impl VersioningConfiguration {
    pub fn enabled() -> Self {
        Self {
            status: VersioningStatus::Enabled,
        }
    }
}

/// Resource tags, rendered as a `[{Key, Value}]` list sorted by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    pub fn new(tags: BTreeMap<String, String>) -> Self {
        Self(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<BTreeMap<String, String>> for Tags {
    fn from(tags: BTreeMap<String, String>) -> Self {
        Self(tags)
    }
}

impl Serialize for Tags {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(serde::Serialize)]
        struct Tag<'a> {
            #[serde(rename = "Key")]
            key: &'a str,
            #[serde(rename = "Value")]
            value: &'a str,
        }

        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            seq.serialize_element(&Tag { key, value })?;
        }
        seq.end()
    }
}

/// `AWS::S3::Bucket` properties
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Bucket {
    #[serde(rename = "BucketEncryption")]
    pub bucket_encryption: BucketEncryption,

    #[serde(rename = "BucketName")]
    pub bucket_name: String,

    #[serde(rename = "Tags")]
    pub tags: Tags,

    #[serde(rename = "VersioningConfiguration")]
    pub versioning_configuration: VersioningConfiguration,
}

impl Bucket {
    /// Convert into a generic template resource
    pub fn to_resource(&self) -> Result<Resource> {
        Resource::new(BUCKET_RESOURCE_TYPE, self)
    }
}
