//! Configuration loading and management

mod loader;

pub use loader::{generate_config, CfnginConfig};
