//! # cfngin-core
//!
//! Core library for CFNgin blueprints providing:
//! - Stack configuration file parsing (cfngin.yaml)
//! - JSON Schema validation
//! - Blueprint variable definitions and resolution
//! - A CloudFormation template object model with JSON/YAML rendering

pub mod cfn;
pub mod config;
pub mod error;
pub mod schema;
pub mod templates;
pub mod types;

pub use config::CfnginConfig;
pub use error::{Error, Result};
pub use schema::SchemaValidator;
