//! Command implementations

pub mod blueprints;
pub mod init;
pub mod render;
pub mod validate;
