//! # skillctl-core
//!
//! Shared vocabulary for the skillctl workspace: the unified error type and
//! the `Result` alias every other crate returns.

pub mod error;

pub use error::{Result, SkillctlError};
