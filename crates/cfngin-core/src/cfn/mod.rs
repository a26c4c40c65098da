//! CloudFormation template object model
//!
//! Templates are built from typed resource properties and rendered to JSON
//! or YAML with serde.

mod intrinsic;
pub mod s3;
mod template;

pub use intrinsic::Intrinsic;
pub use template::{Output, Resource, Template, TEMPLATE_FORMAT_VERSION};
