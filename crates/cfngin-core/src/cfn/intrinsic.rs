//! CloudFormation intrinsic functions

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Intrinsic function reference to another template entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// `{"Ref": logical_id}`
    Ref(String),
    /// `{"Fn::GetAtt": [logical_id, attribute]}`
    GetAtt(String, String),
}

impl Intrinsic {
    /// Reference a resource by logical id
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Intrinsic::Ref(logical_id.into())
    }

    /// Read an attribute of a resource
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Intrinsic::GetAtt(logical_id.into(), attribute.into())
    }

    /// Logical id this function points at
    pub fn logical_id(&self) -> &str {
        match self {
            Intrinsic::Ref(id) | Intrinsic::GetAtt(id, _) => id,
        }
    }
}

impl Serialize for Intrinsic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Intrinsic::Ref(id) => map.serialize_entry("Ref", id)?,
            Intrinsic::GetAtt(id, attribute) => {
                map.serialize_entry("Fn::GetAtt", &[id, attribute])?
            }
        }
        map.end()
    }
}
