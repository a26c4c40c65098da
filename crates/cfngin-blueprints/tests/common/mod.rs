//! Common test utilities for cfngin-blueprints
//!
//! Provides shared assertions over rendered CloudFormation documents.

pub mod assertions;

pub use assertions::*;
