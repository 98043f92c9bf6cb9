//! # skillctl-config
//!
//! Configuration for skillctl. Reads `skillctl.toml`, then applies environment
//! variable overrides. Every field has a default, so a missing file is fine.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ConfigWarning, CustomAgentConfig, LoggingConfig, SkillctlConfig, SkillsConfig, WarningSeverity};
